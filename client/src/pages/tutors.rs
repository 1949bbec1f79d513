//! Tutor profiles. Tutors register on the public site, so there is no create
//! action; staff review, edit and moderate them here.

use leptos::prelude::*;

use crate::components::data_table::Column;
use crate::components::field::{
    ChoiceField, MultiSelectField, SelectField, TextAreaField, TextField, bind, error_for, use_options,
};
use crate::components::resource_screen::{ResourceScreen, ScreenHandle};
use crate::forms::FieldErrors;
use crate::forms::tutor::TutorForm;
use crate::net::entities::{Subject, Tutor, TutorStatus};
use crate::net::resource::Choice;
use crate::pages::{moderation_actions, status_badge};

const GENDERS: &[(&str, &str)] = &[("male", "Male"), ("female", "Female"), ("other", "Other")];

#[component]
pub fn TutorsPage() -> impl IntoView {
    let columns: Vec<Column<Tutor>> = vec![
        Column::new("name", "Name"),
        Column::new("email", "Email"),
        Column::new("phone", "Phone"),
        Column::new("tutorType", "Type"),
        Column::new("subjects", "Subjects"),
        Column::new("status", "Status").with_render(|t: &Tutor| status_badge(t.status)),
    ];

    view! {
        <ResourceScreen<TutorForm>
            title="Tutors"
            columns=columns
            fields=tutor_fields
            allow_create=false
            sort_by="createdAt:desc"
            row_actions=tutor_actions
        />
    }
}

fn tutor_actions(tutor: &Tutor, screen: ScreenHandle) -> AnyView {
    moderation_actions::<Tutor>(&tutor.id, tutor.status.as_str(), screen)
}

fn tutor_fields(form: RwSignal<TutorForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let subjects = use_options::<Subject>();
    let genders: Vec<(String, String)> = GENDERS.iter().map(|(v, l)| ((*v).to_owned(), (*l).to_owned())).collect();

    view! {
        <TextField
            label="Name"
            binding=bind(form, |f| f.name.clone(), |f, v| f.name = v)
            error=error_for(errors, "name")
        />
        <TextField
            label="Email"
            input_type="email"
            binding=bind(form, |f| f.email.clone(), |f, v| f.email = v)
            error=error_for(errors, "email")
        />
        <TextField
            label="Phone"
            input_type="tel"
            binding=bind(form, |f| f.phone.clone(), |f, v| f.phone = v)
            error=error_for(errors, "phone")
        />
        <SelectField
            label="Gender"
            binding=bind(form, |f| f.gender.clone(), |f, v| f.gender = v)
            options=genders
            error=error_for(errors, "gender")
        />
        <TextField
            label="Tutor type"
            placeholder="e.g. Undergraduate"
            binding=bind(form, |f| f.tutor_type.clone(), |f, v| f.tutor_type = v)
            error=error_for(errors, "tutor_type")
        />
        <MultiSelectField
            label="Subjects"
            binding=bind(form, |f| f.subjects.clone(), |f, v| f.subjects = v)
            options=subjects
            error=error_for(errors, "subjects")
        />
        <TextAreaField
            label="Bio"
            binding=bind(form, |f| f.bio.clone(), |f, v| f.bio = v)
            error=error_for(errors, "bio")
        />
        <ChoiceField<TutorStatus> label="Status" binding=bind(form, |f| f.status, |f, v| f.status = v)/>
    }
    .into_any()
}
