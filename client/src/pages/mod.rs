//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each entity page wires a `ResourceScreen` with its columns and form
//! fields. Public pages (sign-in, forbidden) render outside the dashboard
//! chrome.

pub mod assignments;
pub mod blogs;
pub mod faqs;
pub mod forbidden;
pub mod grades;
pub mod home;
pub mod levels;
pub mod papers;
pub mod signin;
pub mod subjects;
pub mod tuition_rates;
pub mod tutor_requests;
pub mod tutors;

use leptos::prelude::*;

use crate::components::data_table::badge;
use crate::components::resource_screen::ScreenHandle;
use crate::net::api;
use crate::net::resource::{Choice, Resource};
use crate::util::format::status_tone;

/// Status pill for any `Choice`-typed status.
pub(crate) fn status_badge<C: Choice>(status: C) -> AnyView {
    badge(status.label(), status_tone(status.as_str()))
}

/// Approve/Reject buttons for moderated resources (blogs, tutors).
///
/// Each button issues a status update and refreshes the list; the button for
/// the current status is hidden.
pub(crate) fn moderation_actions<R: Resource>(id: &str, current: &str, screen: ScreenHandle) -> AnyView {
    let button = |target: &'static str, text: &'static str, class: &'static str| {
        let id = id.to_owned();
        (current != target).then(|| {
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        let id = id.clone();
                        leptos::task::spawn_local(async move {
                            let result = api::set_status::<R>(&id, target).await;
                            screen.settle(result, format!("{} {target}", R::LABEL));
                        });
                    }
                >
                    {text}
                </button>
            }
        })
    };

    view! {
        {button("approved", "Approve", "btn btn--small btn--success")}
        {button("rejected", "Reject", "btn btn--small btn--warning")}
    }
    .into_any()
}
