use super::*;

#[test]
fn count_text_shows_total_once_loaded() {
    assert_eq!(count_text(Some(&Ok(42))), "42");
    assert_eq!(count_text(Some(&Ok(0))), "0");
}

#[test]
fn count_text_placeholders() {
    assert_eq!(count_text(None), "...");
    assert_eq!(count_text(Some(&Err(ApiError::Network("offline".to_owned())))), "-");
}

#[test]
fn count_cards_build_for_each_resource() {
    // Props carry only the type marker; building them must not need a value.
    let _ = CountCardProps::<Grade>::builder().label("Grades").href("/grades").build();
    let _ = CountCardProps::<TutorRequest>::builder().label("Requests").href("/tutor-requests").build();
}
