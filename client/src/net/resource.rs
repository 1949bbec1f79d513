//! The `Resource` abstraction shared by the API client, tables, and dialogs.
//!
//! DESIGN
//! ======
//! Every backend entity exposes the same five REST operations. Implementing
//! `Resource` once per record type is all the generic list screen needs to
//! fetch, render, and mutate it.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A backend-managed entity type exposed via list/get/create/update/delete.
pub trait Resource: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment under `/v1/`, e.g. `"tuition-rates"`.
    const PATH: &'static str;
    /// Singular human label, e.g. `"Tuition Rate"`.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// Short text used in dropdowns and dialog titles.
    fn display_name(&self) -> String;

    /// Why this record cannot be deleted right now, if anything.
    ///
    /// A `Some` disables the confirm action of the delete dialog.
    fn delete_blocked_reason(&self) -> Option<&'static str> {
        None
    }
}

/// A fixed set of string-valued options (statuses, modes) backed by an enum.
pub trait Choice: Copy + PartialEq + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Wire value.
    fn as_str(self) -> &'static str;

    /// Human label.
    fn label(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == raw)
    }
}

/// `(value, label)` pairs for a `Choice`, ready for a select control.
#[must_use]
pub fn choice_options<C: Choice>() -> Vec<(String, String)> {
    C::ALL
        .iter()
        .map(|c| (c.as_str().to_owned(), c.label().to_owned()))
        .collect()
}
