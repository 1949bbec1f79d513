//! Tutor profile and tutor request forms.
//!
//! Both are edit-only in the dashboard: tutors register themselves and
//! requests come from the public site.

#[cfg(test)]
#[path = "tutor_test.rs"]
mod tutor_test;

use serde::Serialize;

use super::{EntityForm, FieldErrors, is_valid_email, is_valid_phone, non_empty, optional, required};
use crate::net::entities::{LessonMode, RequestStatus, Tutor, TutorRequest, TutorStatus};

const INVALID_EMAIL: &str = "Enter a valid email address";
const INVALID_PHONE: &str = "Enter a valid phone number";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TutorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub tutor_type: String,
    pub subjects: Vec<String>,
    pub bio: String,
    pub status: TutorStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub tutor_type: String,
    pub subjects: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub status: TutorStatus,
}

impl EntityForm for TutorForm {
    type Record = Tutor;
    type Payload = TutorPayload;

    fn from_record(record: &Tutor) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            gender: record.gender.clone(),
            tutor_type: record.tutor_type.clone(),
            subjects: record.subjects.iter().map(|s| s.id.clone()).collect(),
            bio: record.bio.clone().unwrap_or_default(),
            status: record.status,
        }
    }

    fn validate(&self) -> Result<TutorPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = required(&mut errors, "name", &self.name, "Name is required");
        let email = required(&mut errors, "email", &self.email, INVALID_EMAIL);
        if !email.is_empty() && !is_valid_email(&email) {
            errors.insert("email", INVALID_EMAIL);
        }
        let phone = required(&mut errors, "phone", &self.phone, INVALID_PHONE);
        if !phone.is_empty() && !is_valid_phone(&phone) {
            errors.insert("phone", INVALID_PHONE);
        }
        let gender = required(&mut errors, "gender", &self.gender, "Gender is required");
        let tutor_type = required(&mut errors, "tutor_type", &self.tutor_type, "Tutor type is required");
        let subjects = non_empty(&mut errors, "subjects", &self.subjects, "At least one subject is required");
        errors.finish(|| TutorPayload {
            name,
            email,
            phone,
            gender,
            tutor_type,
            subjects,
            bio: optional(&self.bio),
            status: self.status,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TutorRequestForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub grade: String,
    pub subject: String,
    pub location: String,
    pub mode: LessonMode,
    pub status: RequestStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TutorRequestPayload {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub grade: String,
    pub subject: String,
    pub location: String,
    pub mode: LessonMode,
    pub status: RequestStatus,
}

impl EntityForm for TutorRequestForm {
    type Record = TutorRequest;
    type Payload = TutorRequestPayload;

    fn from_record(record: &TutorRequest) -> Self {
        Self {
            name: record.name.clone(),
            phone: record.phone.clone(),
            email: record.email.clone().unwrap_or_default(),
            grade: record.grade.id.clone(),
            subject: record.subject.id.clone(),
            location: record.location.clone(),
            mode: record.mode,
            status: record.status,
        }
    }

    fn validate(&self) -> Result<TutorRequestPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = required(&mut errors, "name", &self.name, "Name is required");
        let phone = required(&mut errors, "phone", &self.phone, INVALID_PHONE);
        if !phone.is_empty() && !is_valid_phone(&phone) {
            errors.insert("phone", INVALID_PHONE);
        }
        let email = optional(&self.email);
        if email.as_deref().is_some_and(|e| !is_valid_email(e)) {
            errors.insert("email", INVALID_EMAIL);
        }
        let grade = required(&mut errors, "grade", &self.grade, "Grade is required");
        let subject = required(&mut errors, "subject", &self.subject, "Subject is required");
        let location = required(&mut errors, "location", &self.location, "Location is required");
        errors.finish(|| TutorRequestPayload {
            name,
            phone,
            email,
            grade,
            subject,
            location,
            mode: self.mode,
            status: self.status,
        })
    }
}
