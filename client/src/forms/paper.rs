//! Past paper form. The file itself is uploaded first; the form only keeps
//! the resulting URL.

#[cfg(test)]
#[path = "paper_test.rs"]
mod paper_test;

use serde::Serialize;

use super::{EntityForm, FieldErrors, required};
use crate::net::entities::Paper;

pub const MIN_YEAR: u32 = 1950;
pub const MAX_YEAR: u32 = 2100;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaperForm {
    pub title: String,
    pub year: String,
    pub grade: String,
    pub subject: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaperPayload {
    pub title: String,
    pub year: u32,
    pub grade: String,
    pub subject: String,
    pub url: String,
}

impl EntityForm for PaperForm {
    type Record = Paper;
    type Payload = PaperPayload;

    fn from_record(record: &Paper) -> Self {
        Self {
            title: record.title.clone(),
            year: record.year.to_string(),
            grade: record.grade.id.clone(),
            subject: record.subject.id.clone(),
            url: record.url.clone(),
        }
    }

    fn validate(&self) -> Result<PaperPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        let title = required(&mut errors, "title", &self.title, "Title is required");
        let year = match self.year.trim().parse::<u32>() {
            Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => year,
            _ => {
                errors.insert("year", "Enter a valid year");
                0
            }
        };
        let grade = required(&mut errors, "grade", &self.grade, "Grade is required");
        let subject = required(&mut errors, "subject", &self.subject, "Subject is required");
        let url = required(&mut errors, "url", &self.url, "Upload the paper file");
        errors.finish(|| PaperPayload { title, year, grade, subject, url })
    }
}
