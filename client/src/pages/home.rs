//! Overview page: one count card per managed resource.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use std::marker::PhantomData;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::entities::{Assignment, Blog, Grade, Paper, Subject, Tutor, TutorRequest};
use crate::net::resource::Resource;
use crate::net::types::ListQuery;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="home-page">
            <h1>{move || format!("Welcome, {}", auth.with(AuthState::display_name))}</h1>
            <div class="home-page__cards">
                <CountCard<Grade> label="Grades" href="/grades"/>
                <CountCard<Subject> label="Subjects" href="/subjects"/>
                <CountCard<Paper> label="Papers" href="/papers"/>
                <CountCard<Assignment> label="Assignments" href="/assignments"/>
                <CountCard<Blog> label="Blogs" href="/blogs"/>
                <CountCard<Tutor> label="Tutors" href="/tutors"/>
                <CountCard<TutorRequest> label="Tutor Requests" href="/tutor-requests"/>
            </div>
        </section>
    }
}

/// Card value for a count that may still be loading.
fn count_text(total: Option<&Result<u64, ApiError>>) -> String {
    match total {
        Some(Ok(n)) => n.to_string(),
        Some(Err(_)) => "-".to_owned(),
        None => "...".to_owned(),
    }
}

#[component]
fn CountCard<R: Resource>(
    label: &'static str,
    href: &'static str,
    /// Names the counted resource; carries no data.
    #[prop(optional)]
    resource: PhantomData<R>,
) -> impl IntoView {
    let _ = resource;
    let total = LocalResource::new(|| async {
        api::list::<R>(&ListQuery::count())
            .await
            .map(|page| page.total_results)
    });

    view! {
        <div class="stat-card">
            <A href=href>
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">
                    {move || count_text(total.get().as_ref())}
                </span>
            </A>
        </div>
    }
}
