//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome, the generic resource table and
//! its dialogs. Shared state (session, toasts) comes from Leptos context.

pub mod confirm_dialog;
pub mod data_table;
pub mod field;
pub mod form_dialog;
pub mod layout;
pub mod pager;
pub mod resource_screen;
pub mod route_guard;
pub mod toaster;
pub mod view_dialog;
