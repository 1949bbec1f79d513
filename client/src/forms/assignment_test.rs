use super::*;
use crate::net::types::EntityRef;

fn assignment() -> Assignment {
    Assignment {
        id: "a1".to_owned(),
        title: "Grade 8 Maths tutor needed".to_owned(),
        grade: EntityRef::new("g8", "Grade 8"),
        subject: EntityRef::new("maths", "Mathematics"),
        location: "Kandy".to_owned(),
        mode: LessonMode::Physical,
        rate: 2000,
        frequency: "Twice a week".to_owned(),
        status: AssignmentStatus::Closed,
        description: Some("Weekend classes".to_owned()),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn new_assignment_defaults_to_open_online() {
    let form = AssignmentForm::default();
    assert_eq!(form.mode, LessonMode::Online);
    assert_eq!(form.status, AssignmentStatus::Open);
}

#[test]
fn edit_keeps_enums_and_rate() {
    let form = AssignmentForm::from_record(&assignment());
    assert_eq!(form.mode, LessonMode::Physical);
    assert_eq!(form.status, AssignmentStatus::Closed);
    assert_eq!(form.rate, "2000");

    let json = serde_json::to_value(form.validate().unwrap()).unwrap();
    assert_eq!(json["mode"], "physical");
    assert_eq!(json["status"], "closed");
    assert_eq!(json["rate"], 2000);
}

#[test]
fn rate_must_be_a_whole_number() {
    let form = AssignmentForm { rate: "2,000".to_owned(), ..AssignmentForm::from_record(&assignment()) };
    assert_eq!(form.validate().unwrap_err().get("rate"), Some("Enter the rate as a whole number"));
}

#[test]
fn blank_form_lists_required_fields() {
    let errors = AssignmentForm::default().validate().unwrap_err();
    for field in ["title", "grade", "subject", "location", "rate", "frequency"] {
        assert!(errors.get(field).is_some(), "{field} should be required");
    }
}
