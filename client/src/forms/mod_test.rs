use super::*;

#[test]
fn first_error_per_field_wins() {
    let mut errors = FieldErrors::default();
    errors.insert("title", "Title is required");
    errors.insert("title", "Title is too long");
    assert_eq!(errors.get("title"), Some("Title is required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn finish_builds_only_without_errors() {
    assert_eq!(FieldErrors::default().finish(|| 7), Ok(7));

    let mut errors = FieldErrors::default();
    errors.insert("year", "Enter a valid year");
    let result = errors.clone().finish(|| 7);
    assert_eq!(result, Err(errors));
}

#[test]
fn required_trims_and_flags_blank() {
    let mut errors = FieldErrors::default();
    assert_eq!(required(&mut errors, "title", "  Grade 6 ", "Title is required"), "Grade 6");
    assert!(errors.is_empty());

    assert_eq!(required(&mut errors, "title", "   ", "Title is required"), "");
    assert_eq!(errors.get("title"), Some("Title is required"));
}

#[test]
fn optional_blank_is_none() {
    assert_eq!(optional("  "), None);
    assert_eq!(optional(" notes "), Some("notes".to_owned()));
}

#[test]
fn whole_number_rejects_non_numeric() {
    let mut errors = FieldErrors::default();
    assert_eq!(whole_number(&mut errors, "rate", " 2500 ", "Enter a rate"), 2500);
    assert!(errors.is_empty());
    whole_number(&mut errors, "rate", "2.5k", "Enter a rate");
    assert_eq!(errors.get("rate"), Some("Enter a rate"));
}

#[test]
fn non_empty_drops_blank_ids() {
    let mut errors = FieldErrors::default();
    let ids = non_empty(&mut errors, "subjects", &[" ".to_owned()], "At least one subject is required");
    assert!(ids.is_empty());
    assert_eq!(errors.get("subjects"), Some("At least one subject is required"));
}

#[test]
fn email_validation() {
    assert!(is_valid_email("kamal@tutorme.lk"));
    assert!(!is_valid_email("kamal"));
    assert!(!is_valid_email("@tutorme.lk"));
    assert!(!is_valid_email("kamal@lk"));
    assert!(!is_valid_email("kamal@tutorme."));
}

#[test]
fn phone_validation() {
    assert!(is_valid_phone("0771234567"));
    assert!(is_valid_phone("+94 77 123 4567"));
    assert!(is_valid_phone("077-123-4567"));
    assert!(!is_valid_phone("12345"));
    assert!(!is_valid_phone("07712345ab"));
}

#[test]
fn toggle_id_adds_then_removes() {
    let ids = toggle_id(&[], "s1");
    assert_eq!(ids, vec!["s1".to_owned()]);
    let ids = toggle_id(&ids, "s2");
    assert_eq!(ids, vec!["s1".to_owned(), "s2".to_owned()]);
    let ids = toggle_id(&ids, "s1");
    assert_eq!(ids, vec!["s2".to_owned()]);
}
