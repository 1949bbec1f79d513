use leptos::prelude::*;

use crate::components::data_table::Column;
use crate::components::field::{TextAreaField, TextField, bind, error_for};
use crate::components::resource_screen::ResourceScreen;
use crate::forms::FieldErrors;
use crate::forms::catalogue::LevelForm;
use crate::net::entities::Level;

#[component]
pub fn LevelsPage() -> impl IntoView {
    let columns: Vec<Column<Level>> = vec![
        Column::new("title", "Title"),
        Column::new("description", "Description"),
        Column::new("updatedAt", "Updated"),
    ];

    view! { <ResourceScreen<LevelForm> title="Levels" columns=columns fields=level_fields/> }
}

fn level_fields(form: RwSignal<LevelForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    view! {
        <TextField
            label="Title"
            placeholder="e.g. Ordinary Level"
            binding=bind(form, |f| f.title.clone(), |f, v| f.title = v)
            error=error_for(errors, "title")
        />
        <TextAreaField
            label="Description"
            rows=3
            binding=bind(form, |f| f.description.clone(), |f, v| f.description = v)
            error=error_for(errors, "description")
        />
    }
    .into_any()
}
