use super::*;

#[test]
fn error_message_prefers_message_field() {
    let body = r#"{"code":400,"message":"\"title\" is required"}"#;
    assert_eq!(error_message_from_body(400, body), "\"title\" is required");
}

#[test]
fn error_message_falls_back_to_error_field() {
    assert_eq!(error_message_from_body(400, r#"{"error":"No file uploaded"}"#), "No file uploaded");
}

#[test]
fn error_message_falls_back_to_status_for_non_json() {
    assert_eq!(error_message_from_body(502, "<html>Bad Gateway</html>"), "request failed: 502");
}

#[test]
fn error_message_ignores_blank_message() {
    assert_eq!(error_message_from_body(500, r#"{"message":"  "}"#), "request failed: 500");
}

#[test]
fn api_error_user_message_is_verbatim() {
    let err = ApiError::from_response(409, r#"{"message":"Grade already exists"}"#);
    assert_eq!(err.user_message(), "Grade already exists");
    assert_eq!(err.to_string(), "Grade already exists");
}

#[test]
fn network_error_user_message_is_generic() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn unauthorized_detection() {
    assert!(ApiError::from_response(401, "{}").is_unauthorized());
    assert!(!ApiError::from_response(403, "{}").is_unauthorized());
}
