//! Build-time client configuration.
//!
//! The API base URL is baked into the WASM bundle from `TUTORME_API_BASE_URL`
//! at compile time; there is no runtime config fetch.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Base URL of the TutorMe REST backend, without a trailing slash.
#[must_use]
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("TUTORME_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(normalize_base_url("https://api.tutorme.lk/"), "https://api.tutorme.lk");
    }

    #[test]
    fn normalize_blank_falls_back_to_default() {
        assert_eq!(normalize_base_url("  "), DEFAULT_API_BASE_URL);
    }
}
