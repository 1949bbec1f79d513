use leptos::prelude::*;

use crate::components::data_table::Column;
use crate::components::field::{MultiSelectField, TextAreaField, TextField, bind, error_for, use_options};
use crate::components::resource_screen::ResourceScreen;
use crate::forms::FieldErrors;
use crate::forms::catalogue::GradeForm;
use crate::net::entities::{Grade, Subject};

#[component]
pub fn GradesPage() -> impl IntoView {
    let columns: Vec<Column<Grade>> = vec![
        Column::new("title", "Title"),
        Column::new("subjects", "Subjects"),
        Column::new("description", "Description"),
        Column::new("createdAt", "Created"),
    ];

    view! { <ResourceScreen<GradeForm> title="Grades" columns=columns fields=grade_fields sort_by="title:asc"/> }
}

fn grade_fields(form: RwSignal<GradeForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let subjects = use_options::<Subject>();

    view! {
        <TextField
            label="Title"
            binding=bind(form, |f| f.title.clone(), |f, v| f.title = v)
            error=error_for(errors, "title")
        />
        <TextAreaField
            label="Description"
            binding=bind(form, |f| f.description.clone(), |f, v| f.description = v)
            error=error_for(errors, "description")
        />
        <MultiSelectField
            label="Subjects"
            binding=bind(form, |f| f.subjects.clone(), |f, v| f.subjects = v)
            options=subjects
            error=error_for(errors, "subjects")
        />
    }
    .into_any()
}
