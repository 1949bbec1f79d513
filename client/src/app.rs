//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::route_guard::RouteGuard;
use crate::components::toaster::Toaster;
use crate::pages::{
    assignments::AssignmentsPage, blogs::BlogsPage, faqs::FaqsPage, forbidden::ForbiddenPage, grades::GradesPage,
    home::HomePage, levels::LevelsPage, papers::PapersPage, signin::SignInPage, subjects::SubjectsPage,
    tuition_rates::TuitionRatesPage, tutor_requests::TutorRequestsPage, tutors::TutorsPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, resolves the session once in the
/// browser, and routes every page through the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.set(AuthState::loaded(user));
    });

    view! {
        <Title text="TutorMe Admin"/>

        <Router>
            <RouteGuard>
                <Layout>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("signin") view=SignInPage/>
                        <Route path=StaticSegment("forbidden") view=ForbiddenPage/>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("grades") view=GradesPage/>
                        <Route path=StaticSegment("subjects") view=SubjectsPage/>
                        <Route path=StaticSegment("levels") view=LevelsPage/>
                        <Route path=StaticSegment("papers") view=PapersPage/>
                        <Route path=StaticSegment("tuition-rates") view=TuitionRatesPage/>
                        <Route path=StaticSegment("assignments") view=AssignmentsPage/>
                        <Route path=StaticSegment("blogs") view=BlogsPage/>
                        <Route path=StaticSegment("faqs") view=FaqsPage/>
                        <Route path=StaticSegment("tutors") view=TutorsPage/>
                        <Route path=StaticSegment("tutor-requests") view=TutorRequestsPage/>
                    </Routes>
                </Layout>
            </RouteGuard>
            <Toaster/>
        </Router>
    }
}
