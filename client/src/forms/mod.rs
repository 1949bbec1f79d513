//! Schema-validated form models, one per editable entity.
//!
//! DESIGN
//! ======
//! A form holds raw input (strings as typed) and `validate()` turns it into
//! the typed payload the backend expects, or into per-field messages. Because
//! the payload only exists after validation, an invalid form can never reach
//! the network.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod assignment;
pub mod blog;
pub mod catalogue;
pub mod faq;
pub mod paper;
pub mod tuition_rate;
pub mod tutor;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::net::resource::Resource;

/// Validation messages keyed by field name. The first message per field wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(build())` when no errors were recorded, else `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collected errors if any field failed validation.
    pub fn finish<T>(self, build: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(build()) } else { Err(self) }
    }
}

/// A create/edit form bound to one resource.
pub trait EntityForm: Clone + Default + PartialEq + Send + Sync + 'static {
    type Record: Resource;
    type Payload: Serialize + Send + Sync + 'static;

    /// Edits keep save disabled until something changed.
    const REQUIRE_DIRTY_EDIT: bool = false;

    /// Initial state of the create dialog.
    fn blank() -> Self {
        Self::default()
    }

    /// Pre-fill from an existing row for the edit dialog.
    fn from_record(record: &Self::Record) -> Self;

    /// Produce the create/update payload.
    ///
    /// # Errors
    ///
    /// Returns every field that failed validation.
    fn validate(&self) -> Result<Self::Payload, FieldErrors>;
}

// =============================================================================
// FIELD RULES
// =============================================================================

/// Trimmed `raw`, recording `message` if it is blank.
pub fn required(errors: &mut FieldErrors, field: &'static str, raw: &str, message: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        errors.insert(field, message);
    }
    value.to_owned()
}

/// Trimmed `raw`, or `None` if blank.
#[must_use]
pub fn optional(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Parse a whole number, recording `message` if it is blank or malformed.
pub fn whole_number(errors: &mut FieldErrors, field: &'static str, raw: &str, message: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or_else(|_| {
        errors.insert(field, message);
        0
    })
}

/// Record `message` if no item was selected.
pub fn non_empty(errors: &mut FieldErrors, field: &'static str, ids: &[String], message: &str) -> Vec<String> {
    let ids: Vec<String> = ids
        .iter()
        .map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .collect();
    if ids.is_empty() {
        errors.insert(field, message);
    }
    ids
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.trim().split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Local (`0771234567`) or international (`+94771234567`) numbers.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    let digits = raw.trim().strip_prefix('+').unwrap_or(raw.trim());
    let digits: String = digits.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    (9..=12).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Toggle `id` in a multi-select value.
#[must_use]
pub fn toggle_id(ids: &[String], id: &str) -> Vec<String> {
    if ids.iter().any(|existing| existing == id) {
        ids.iter().filter(|existing| *existing != id).cloned().collect()
    } else {
        let mut next = ids.to_vec();
        next.push(id.to_owned());
        next
    }
}
