//! Applies the guard decision for the current location.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::guard::{ADMIN_POLICY, GuardDecision, decide};

/// Renders children only on `Allow`. Every redirect replaces the history
/// entry, so re-running the effect for the same state is harmless.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        auth.with(|state| decide(state, &path, &ADMIN_POLICY))
    });

    Effect::new(move || {
        if let Some(target) = ADMIN_POLICY.redirect_target(decision.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=|| view! { <div class="guard-pending"></div> }
        >
            {children()}
        </Show>
    }
}
