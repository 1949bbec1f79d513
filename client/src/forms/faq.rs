#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use serde::Serialize;

use super::{EntityForm, FieldErrors, optional, required};
use crate::net::entities::Faq;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaqForm {
    pub question: String,
    /// Markdown.
    pub answer: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaqPayload {
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EntityForm for FaqForm {
    type Record = Faq;
    type Payload = FaqPayload;

    fn from_record(record: &Faq) -> Self {
        Self {
            question: record.question.clone(),
            answer: record.answer.clone(),
            category: record.category.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<FaqPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        let question = required(&mut errors, "question", &self.question, "Question is required");
        let answer = required(&mut errors, "answer", &self.answer, "Answer is required");
        errors.finish(|| FaqPayload { question, answer, category: optional(&self.category) })
    }
}
