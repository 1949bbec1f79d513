//! Error type for REST calls made by the dashboard.
//!
//! ERROR HANDLING
//! ==============
//! `Api` errors carry the backend's own message and are shown verbatim in a
//! toast. Transport and decode failures are logged and shown generically.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// Text for an error notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Build an `Api` error from a failed response body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Api { status, message: error_message_from_body(status, body) }
    }
}

/// Extract the backend's `message` (or `error`) field from an error body.
#[must_use]
pub fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"]
                .iter()
                .find_map(|k| v.get(*k).and_then(serde_json::Value::as_str).map(str::to_owned))
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}
