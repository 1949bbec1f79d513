//! Dashboard chrome: sidebar navigation and the signed-in user bar.
//!
//! Public pages (sign-in, forbidden) render without the chrome.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::guard::ADMIN_POLICY;

/// Sidebar entries in display order.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Overview"),
    ("/grades", "Grades"),
    ("/subjects", "Subjects"),
    ("/levels", "Levels"),
    ("/papers", "Papers"),
    ("/tuition-rates", "Tuition Rates"),
    ("/assignments", "Assignments"),
    ("/blogs", "Blogs"),
    ("/faqs", "FAQs"),
    ("/tutors", "Tutors"),
    ("/tutor-requests", "Tutor Requests"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let location = use_location();
    let bare = move || ADMIN_POLICY.is_public(&location.pathname.get());

    view! {
        <div class="layout" class:layout--bare=bare>
            <Show when=move || !bare()>
                <Sidebar/>
            </Show>
            <div class="layout__main">
                <Show when=move || !bare()>
                    <UserBar/>
                </Show>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"TutorMe Admin"</div>
            <ul class="sidebar__links">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, text)| {
                        let href = *href;
                        let active = move || location.pathname.get() == href;
                        view! {
                            <li class="sidebar__item" class:sidebar__item--active=active>
                                <A href=href>{*text}</A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}

#[component]
fn UserBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            api::logout().await;
            auth.set(AuthState::loaded(None));
        });
    };

    view! {
        <header class="userbar">
            <span class="userbar__spacer"></span>
            <span class="userbar__name">{move || auth.with(AuthState::display_name)}</span>
            <button class="btn userbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
