use leptos::prelude::*;

use crate::components::data_table::Column;
use crate::components::field::{TextAreaField, TextField, bind, error_for};
use crate::components::resource_screen::ResourceScreen;
use crate::forms::FieldErrors;
use crate::forms::catalogue::SubjectForm;
use crate::net::entities::Subject;

#[component]
pub fn SubjectsPage() -> impl IntoView {
    let columns: Vec<Column<Subject>> = vec![
        Column::new("title", "Title"),
        Column::new("description", "Description"),
        Column::new("createdAt", "Created"),
    ];

    view! {
        <ResourceScreen<SubjectForm> title="Subjects" columns=columns fields=subject_fields sort_by="title:asc"/>
    }
}

fn subject_fields(form: RwSignal<SubjectForm>, errors: RwSignal<FieldErrors>) -> AnyView {
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
    }
    .into_any()
}
