use super::*;
use serde_json::json;

#[test]
fn short_date_trims_iso_timestamp() {
    assert_eq!(short_date("2024-03-01T10:00:00.000Z"), "2024-03-01");
}

#[test]
fn short_date_passes_through_other_text() {
    assert_eq!(short_date("yesterday"), "yesterday");
}

#[test]
fn humanize_camel_and_snake_keys() {
    assert_eq!(humanize_key("totalResults"), "Total Results");
    assert_eq!(humanize_key("tutor_type"), "Tutor Type");
    assert_eq!(humanize_key("title"), "Title");
}

#[test]
fn lookup_walks_dotted_keys() {
    let row = json!({ "grade": { "title": "Grade 10" } });
    assert_eq!(lookup(&row, "grade.title"), Some(&json!("Grade 10")));
    assert_eq!(lookup(&row, "grade.missing"), None);
}

#[test]
fn cell_text_missing_key_is_placeholder() {
    assert_eq!(cell_text(&json!({}), "title"), EMPTY_CELL);
}

#[test]
fn cell_text_joins_reference_titles() {
    let row = json!({ "subjects": [{ "id": "s1", "title": "Maths" }, { "id": "s2", "title": "Science" }] });
    assert_eq!(cell_text(&row, "subjects"), "Maths, Science");
}

#[test]
fn cell_text_empty_array_is_placeholder() {
    assert_eq!(cell_text(&json!({ "subjects": [] }), "subjects"), EMPTY_CELL);
}

#[test]
fn value_text_formats_scalars() {
    assert_eq!(value_text(&json!(2019)), "2019");
    assert_eq!(value_text(&json!(true)), "Yes");
    assert_eq!(value_text(&json!(null)), EMPTY_CELL);
    assert_eq!(value_text(&json!("")), EMPTY_CELL);
}

#[test]
fn detail_rows_hide_ids_and_shorten_timestamps() {
    let row = json!({
        "id": "g1",
        "title": "Grade 10",
        "createdAt": "2024-03-01T10:00:00.000Z"
    });
    let rows = detail_rows(&row);
    assert_eq!(
        rows,
        vec![
            ("Title".to_owned(), "Grade 10".to_owned()),
            ("Created At".to_owned(), "2024-03-01".to_owned()),
        ]
    );
}

#[test]
fn detail_rows_of_non_object_is_empty() {
    assert!(detail_rows(&json!([1, 2])).is_empty());
}

#[test]
fn cell_text_shortens_timestamps() {
    let row = json!({ "createdAt": "2024-03-01T10:00:00.000Z", "title": "2024-03-01T10:00:00.000Z" });
    assert_eq!(cell_text(&row, "createdAt"), "2024-03-01");
    assert_eq!(cell_text(&row, "title"), "2024-03-01T10:00:00.000Z");
}

#[test]
fn status_tones() {
    assert_eq!(status_tone("approved"), "success");
    assert_eq!(status_tone("cancelled"), "danger");
    assert_eq!(status_tone("pending"), "neutral");
}
