//! Forms for the reference catalogue: grades, subjects and levels.

#[cfg(test)]
#[path = "catalogue_test.rs"]
mod catalogue_test;

use serde::Serialize;

use super::{EntityForm, FieldErrors, non_empty, optional, required};
use crate::net::entities::{Grade, Level, Subject};

const TITLE_REQUIRED: &str = "Title is required";

/// Payload shared by the title/description entities.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TitledPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradeForm {
    pub title: String,
    pub description: String,
    pub subjects: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradePayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub subjects: Vec<String>,
}

impl EntityForm for GradeForm {
    type Record = Grade;
    type Payload = GradePayload;

    fn from_record(record: &Grade) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone().unwrap_or_default(),
            subjects: record.subjects.iter().map(|s| s.id.clone()).collect(),
        }
    }

    fn validate(&self) -> Result<GradePayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        let title = required(&mut errors, "title", &self.title, TITLE_REQUIRED);
        let subjects = non_empty(&mut errors, "subjects", &self.subjects, "At least one subject is required");
        errors.finish(|| GradePayload { title, description: optional(&self.description), subjects })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubjectForm {
    pub title: String,
    pub description: String,
}

impl EntityForm for SubjectForm {
    type Record = Subject;
    type Payload = TitledPayload;

    fn from_record(record: &Subject) -> Self {
        Self { title: record.title.clone(), description: record.description.clone().unwrap_or_default() }
    }

    fn validate(&self) -> Result<TitledPayload, FieldErrors> {
        validate_titled(&self.title, &self.description)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelForm {
    pub title: String,
    pub description: String,
}

impl EntityForm for LevelForm {
    type Record = Level;
    type Payload = TitledPayload;

    fn from_record(record: &Level) -> Self {
        Self { title: record.title.clone(), description: record.description.clone().unwrap_or_default() }
    }

    fn validate(&self) -> Result<TitledPayload, FieldErrors> {
        validate_titled(&self.title, &self.description)
    }
}

fn validate_titled(title: &str, description: &str) -> Result<TitledPayload, FieldErrors> {
    let mut errors = FieldErrors::default();
    let title = required(&mut errors, "title", title, TITLE_REQUIRED);
    errors.finish(|| TitledPayload { title, description: optional(description) })
}
