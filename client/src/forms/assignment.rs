//! Tuition assignment form.

#[cfg(test)]
#[path = "assignment_test.rs"]
mod assignment_test;

use serde::Serialize;

use super::{EntityForm, FieldErrors, optional, required, whole_number};
use crate::net::entities::{Assignment, AssignmentStatus, LessonMode};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentForm {
    pub title: String,
    pub grade: String,
    pub subject: String,
    pub location: String,
    pub mode: LessonMode,
    pub rate: String,
    pub frequency: String,
    pub status: AssignmentStatus,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssignmentPayload {
    pub title: String,
    pub grade: String,
    pub subject: String,
    pub location: String,
    pub mode: LessonMode,
    pub rate: u32,
    pub frequency: String,
    pub status: AssignmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EntityForm for AssignmentForm {
    type Record = Assignment;
    type Payload = AssignmentPayload;

    fn from_record(record: &Assignment) -> Self {
        Self {
            title: record.title.clone(),
            grade: record.grade.id.clone(),
            subject: record.subject.id.clone(),
            location: record.location.clone(),
            mode: record.mode,
            rate: record.rate.to_string(),
            frequency: record.frequency.clone(),
            status: record.status,
            description: record.description.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<AssignmentPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        let title = required(&mut errors, "title", &self.title, "Title is required");
        let grade = required(&mut errors, "grade", &self.grade, "Grade is required");
        let subject = required(&mut errors, "subject", &self.subject, "Subject is required");
        let location = required(&mut errors, "location", &self.location, "Location is required");
        let rate = whole_number(&mut errors, "rate", &self.rate, "Enter the rate as a whole number");
        let frequency = required(&mut errors, "frequency", &self.frequency, "Frequency is required");
        errors.finish(|| AssignmentPayload {
            title,
            grade,
            subject,
            location,
            mode: self.mode,
            rate,
            frequency,
            status: self.status,
            description: optional(&self.description),
        })
    }
}
