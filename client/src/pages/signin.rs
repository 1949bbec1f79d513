//! Email + password sign-in for staff accounts.
//!
//! A successful login stores the access token and loads the session user;
//! the route guard then moves the browser to the dashboard (or to
//! `/forbidden` for accounts without a staff role).

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

use crate::forms::is_valid_email;
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::util::storage;

/// Trimmed email and the raw password, or the message to show.
fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn sign_in_error_message(err: &ApiError) -> String {
    if err.is_unauthorized() { "Incorrect email or password.".to_owned() } else { err.user_message() }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_sign_in_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        info.set(None);
        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    storage::save_session_token(&resp.tokens.access.token);
                    password.set(String::new());
                    auth.set(AuthState::loaded(Some(resp.user)));
                }
                Err(err) => info.set(Some(sign_in_error_message(&err))),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"TutorMe Admin"</h1>
                <p class="signin-card__subtitle">"Sign in with your staff account"</p>
                <form class="signin-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="username"
                            placeholder="you@tutorme.lk"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary signin-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                {move || info.get().map(|message| view! { <p class="signin-card__error">{message}</p> })}
            </div>
        </div>
    }
}
