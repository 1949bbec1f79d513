use leptos::prelude::*;

use crate::components::data_table::Column;
use crate::components::field::{FileUploadField, SelectField, TextField, bind, error_for, use_options};
use crate::components::resource_screen::ResourceScreen;
use crate::forms::FieldErrors;
use crate::forms::paper::PaperForm;
use crate::net::entities::{Grade, Paper, Subject};

#[component]
pub fn PapersPage() -> impl IntoView {
    let columns: Vec<Column<Paper>> = vec![
        Column::new("title", "Title"),
        Column::new("year", "Year"),
        Column::new("grade.title", "Grade"),
        Column::new("subject.title", "Subject"),
        Column::new("url", "File").with_render(|paper: &Paper| {
            view! {
                <a href=paper.url.clone() target="_blank" rel="noopener">
                    "Download"
                </a>
            }
            .into_any()
        }),
    ];

    view! { <ResourceScreen<PaperForm> title="Past Papers" columns=columns fields=paper_fields sort_by="year:desc"/> }
}

fn paper_fields(form: RwSignal<PaperForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let grades = use_options::<Grade>();
    let subjects = use_options::<Subject>();

    view! {
        <TextField
            label="Title"
            binding=bind(form, |f| f.title.clone(), |f, v| f.title = v)
            error=error_for(errors, "title")
        />
        <TextField
            label="Year"
            input_type="number"
            placeholder="2024"
            binding=bind(form, |f| f.year.clone(), |f, v| f.year = v)
            error=error_for(errors, "year")
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
        <FileUploadField
            label="Paper (PDF)"
            accept="application/pdf"
            binding=bind(form, |f| f.url.clone(), |f, v| f.url = v)
            error=error_for(errors, "url")
        />
    }
    .into_any()
}
