use super::*;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(
        validate_sign_in_input("  admin@tutorme.lk ", "secret1"),
        Ok(("admin@tutorme.lk".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("", "secret1"), Err("Enter your email and password."));
    assert_eq!(validate_sign_in_input("admin@tutorme.lk", ""), Err("Enter your email and password."));
}

#[test]
fn validate_sign_in_input_rejects_malformed_email() {
    assert_eq!(validate_sign_in_input("admin", "secret1"), Err("Enter a valid email address."));
}

#[test]
fn unauthorized_login_gets_specific_message() {
    let err = ApiError::Api { status: 401, message: "Incorrect email or password".to_owned() };
    assert_eq!(sign_in_error_message(&err), "Incorrect email or password.");
}

#[test]
fn other_login_failures_use_error_message() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(sign_in_error_message(&err), err.user_message());
}
