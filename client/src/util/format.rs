//! Display formatting for table cells and detail views.
//!
//! DESIGN
//! ======
//! Default cell rendering works on the row's serialized JSON so the generic
//! table needs no per-entity code for plain fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde_json::Value;

/// Placeholder for absent values.
pub const EMPTY_CELL: &str = "-";

/// `"2024-03-01T10:00:00.000Z"` -> `"2024-03-01"`. Non-ISO input is returned as-is.
#[must_use]
pub fn short_date(raw: &str) -> String {
    match raw.split_once('T') {
        Some((date, _)) if date.len() == 10 => date.to_owned(),
        _ => raw.to_owned(),
    }
}

/// `"totalResults"` / `"tutor_type"` -> `"Total Results"` / `"Tutor Type"`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == '.' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Walk a dotted key (`"grade.title"`) through nested objects.
#[must_use]
pub fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(value, |current, segment| current.get(segment))
}

/// Human text for a JSON value.
///
/// Arrays of objects render as their titles/names joined with `", "`.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_CELL.to_owned(),
        Value::Bool(b) => if *b { "Yes" } else { "No" }.to_owned(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.is_empty() => EMPTY_CELL.to_owned(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::Object(_) => label_of(item).unwrap_or_else(|| EMPTY_CELL.to_owned()),
                    other => value_text(other),
                })
                .collect();
            if parts.is_empty() { EMPTY_CELL.to_owned() } else { parts.join(", ") }
        }
        Value::Object(_) => label_of(value).unwrap_or_else(|| EMPTY_CELL.to_owned()),
    }
}

fn label_of(value: &Value) -> Option<String> {
    ["title", "name", "category", "text", "url"]
        .iter()
        .find_map(|k| value.get(*k).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Cell text for `key` in a serialized row. Timestamp keys (`*At`) show the date only.
#[must_use]
pub fn cell_text(row: &Value, key: &str) -> String {
    lookup(row, key).map_or_else(|| EMPTY_CELL.to_owned(), |v| field_text(key, v))
}

fn field_text(key: &str, value: &Value) -> String {
    match value.as_str() {
        Some(raw) if key.ends_with("At") && !raw.is_empty() => short_date(raw),
        _ => value_text(value),
    }
}

/// Badge colour for a status wire value.
#[must_use]
pub fn status_tone(status: &str) -> &'static str {
    match status {
        "approved" | "open" | "assigned" | "completed" => "success",
        "rejected" | "closed" | "cancelled" => "danger",
        _ => "neutral",
    }
}

/// Keys never shown in the details dialog.
const HIDDEN_DETAIL_KEYS: &[&str] = &["id", "_id", "__v"];

/// `(label, text)` rows for a read-only details view, in field order.
#[must_use]
pub fn detail_rows(row: &Value) -> Vec<(String, String)> {
    let Value::Object(map) = row else {
        return Vec::new();
    };
    map.iter()
        .filter(|(k, _)| !HIDDEN_DETAIL_KEYS.contains(&k.as_str()))
        .map(|(k, v)| (humanize_key(k), field_text(k, v)))
        .collect()
}
