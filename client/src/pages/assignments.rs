use leptos::prelude::*;

use crate::components::data_table::Column;
use crate::components::field::{ChoiceField, SelectField, TextAreaField, TextField, bind, error_for, use_options};
use crate::components::resource_screen::ResourceScreen;
use crate::forms::FieldErrors;
use crate::forms::assignment::AssignmentForm;
use crate::net::entities::{Assignment, AssignmentStatus, Grade, LessonMode, Subject};
use crate::net::resource::Choice;
use crate::pages::status_badge;

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let columns: Vec<Column<Assignment>> = vec![
        Column::new("title", "Title"),
        Column::new("grade.title", "Grade"),
        Column::new("subject.title", "Subject"),
        Column::new("location", "Location"),
        Column::new("mode", "Mode").with_render(|a: &Assignment| a.mode.label().into_any()),
        Column::new("rate", "Rate (LKR)"),
        Column::new("status", "Status").with_render(|a: &Assignment| status_badge(a.status)),
    ];

    view! {
        <ResourceScreen<AssignmentForm>
            title="Assignments"
            columns=columns
            fields=assignment_fields
            sort_by="createdAt:desc"
        />
    }
}

fn assignment_fields(form: RwSignal<AssignmentForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let grades = use_options::<Grade>();
    let subjects = use_options::<Subject>();

    view! {
        <TextField
            label="Title"
            binding=bind(form, |f| f.title.clone(), |f, v| f.title = v)
            error=error_for(errors, "title")
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
        <TextField
            label="Rate (LKR per session)"
            input_type="number"
            binding=bind(form, |f| f.rate.clone(), |f, v| f.rate = v)
            error=error_for(errors, "rate")
        />
        <TextField
            label="Frequency"
            placeholder="e.g. Twice a week"
            binding=bind(form, |f| f.frequency.clone(), |f, v| f.frequency = v)
            error=error_for(errors, "frequency")
        />
        <ChoiceField<AssignmentStatus> label="Status" binding=bind(form, |f| f.status, |f, v| f.status = v)/>
        <TextAreaField
            label="Description"
            binding=bind(form, |f| f.description.clone(), |f, v| f.description = v)
            error=error_for(errors, "description")
        />
    }
    .into_any()
}
