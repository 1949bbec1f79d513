use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::AuthState;

/// Shown to signed-in accounts without a staff role.
#[component]
pub fn ForbiddenPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_sign_out = move |_| {
        leptos::task::spawn_local(async move {
            api::logout().await;
            auth.set(AuthState::loaded(None));
        });
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"Access denied"</h1>
                <p>"Your account does not have access to the admin dashboard."</p>
                <button class="btn btn--primary" on:click=on_sign_out>
                    "Sign in with another account"
                </button>
            </div>
        </div>
    }
}
