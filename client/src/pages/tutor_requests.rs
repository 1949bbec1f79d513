//! Tutor requests from students and parents.
//!
//! The "Assigned Tutor" column is edited in place: the dropdown shows the new
//! tutor immediately and falls back to the previous one if the update fails.

#[cfg(test)]
#[path = "tutor_requests_test.rs"]
mod tutor_requests_test;

use leptos::prelude::*;

use crate::components::data_table::Column;
use crate::components::field::{ChoiceField, SelectField, TextField, bind, error_for, use_options};
use crate::components::resource_screen::ResourceScreen;
use crate::components::toaster::notify;
use crate::forms::FieldErrors;
use crate::forms::tutor::TutorRequestForm;
use crate::net::api;
use crate::net::entities::{Grade, LessonMode, RequestStatus, Subject, Tutor, TutorRequest, TutorStatus};
use crate::net::resource::{Choice, Resource};
use crate::net::types::ListQuery;
use crate::pages::status_badge;
use crate::state::toast::{ToastKind, ToastState};

/// Tutors that may be assigned, as `(id, name)`.
fn assignable_tutors(tutors: &[Tutor]) -> Vec<(String, String)> {
    tutors
        .iter()
        .filter(|t| t.status == TutorStatus::Approved)
        .map(|t| (t.id.clone(), t.display_name()))
        .collect()
}

/// The tutor to assign for a dropdown change, if it is a real change.
fn assignment_change(current: &str, choice: &str) -> Option<String> {
    (!choice.is_empty() && choice != current).then(|| choice.to_owned())
}

#[component]
pub fn TutorRequestsPage() -> impl IntoView {
    let loaded = LocalResource::new(|| async { api::list::<Tutor>(&ListQuery::options()).await });
    let tutors = Signal::derive(move || match loaded.get() {
        Some(Ok(page)) => assignable_tutors(&page.results),
        Some(Err(_)) | None => Vec::new(),
    });

    let columns: Vec<Column<TutorRequest>> = vec![
        Column::new("name", "Name"),
        Column::new("phone", "Phone"),
        Column::new("grade.title", "Grade"),
        Column::new("subject.title", "Subject"),
        Column::new("mode", "Mode").with_render(|r: &TutorRequest| r.mode.label().into_any()),
        Column::new("status", "Status").with_render(|r: &TutorRequest| status_badge(r.status)),
        Column::new("assignedTutors", "Assigned Tutor").with_render(move |r: &TutorRequest| {
            view! {
                <AssignTutorCell
                    request_id=r.id.clone()
                    current=r.assigned_tutors.first().map(|t| t.id.clone()).unwrap_or_default()
                    tutors=tutors
                />
            }
            .into_any()
        }),
    ];

    view! {
        <ResourceScreen<TutorRequestForm>
            title="Tutor Requests"
            columns=columns
            fields=request_fields
            allow_create=false
            sort_by="createdAt:desc"
        />
    }
}

#[component]
fn AssignTutorCell(
    request_id: String,
    current: String,
    #[prop(into)] tutors: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let selected = RwSignal::new(current);
    let busy = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        let previous = selected.get_untracked();
        let Some(choice) = assignment_change(&previous, &event_target_value(&ev)) else {
            return;
        };
        selected.set(choice.clone());
        busy.set(true);
        let request_id = request_id.clone();
        leptos::task::spawn_local(async move {
            match api::assign_tutor(&request_id, &choice).await {
                Ok(_) => notify(toasts, ToastKind::Success, "Tutor assigned"),
                Err(err) => {
                    selected.set(previous);
                    notify(toasts, ToastKind::Error, err.user_message());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <select
            class="field__input field__input--compact"
            disabled=move || busy.get()
            prop:value=move || selected.get()
            on:change=on_change
        >
            <option value="">"Unassigned"</option>
            {move || {
                let current = selected.get();
                tutors
                    .get()
                    .into_iter()
                    .map(|(id, name)| {
                        let is_selected = id == current;
                        view! { <option value=id selected=is_selected>{name}</option> }
                    })
                    .collect::<Vec<_>>()
            }}
        </select>
    }
}

fn request_fields(form: RwSignal<TutorRequestForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let grades = use_options::<Grade>();
    let subjects = use_options::<Subject>();

    view! {
        <TextField
            label="Name"
            binding=bind(form, |f| f.name.clone(), |f, v| f.name = v)
            error=error_for(errors, "name")
        />
        <TextField
            label="Phone"
            input_type="tel"
            binding=bind(form, |f| f.phone.clone(), |f, v| f.phone = v)
            error=error_for(errors, "phone")
        />
        <TextField
            label="Email"
            input_type="email"
            binding=bind(form, |f| f.email.clone(), |f, v| f.email = v)
            error=error_for(errors, "email")
        />
        <SelectField
            label="Grade"
            binding=bind(form, |f| f.grade.clone(), |f, v| f.grade = v)
            options=grades
            error=error_for(errors, "grade")
        />
        <SelectField
            label="Subject"
            binding=bind(form, |f| f.subject.clone(), |f, v| f.subject = v)
            options=subjects
            error=error_for(errors, "subject")
        />
        <TextField
            label="Location"
            binding=bind(form, |f| f.location.clone(), |f, v| f.location = v)
            error=error_for(errors, "location")
        />
        <ChoiceField<LessonMode> label="Mode" binding=bind(form, |f| f.mode, |f, v| f.mode = v)/>
        <ChoiceField<RequestStatus> label="Status" binding=bind(form, |f| f.status, |f, v| f.status = v)/>
    }
    .into_any()
}
