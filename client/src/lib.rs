//! # tutorme-client
//!
//! Leptos + WASM admin dashboard for the TutorMe tuition marketplace.
//!
//! Staff manage the catalogue (grades, subjects, levels, past papers, tuition
//! rates), marketplace content (assignments, blogs, FAQs) and the tutor
//! pipeline (tutor profiles, tutor requests) against the TutorMe REST API.
//! File uploads go through the companion `tutorme-server` crate, which also
//! serves this app with SSR.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
