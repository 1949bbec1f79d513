use super::*;
use crate::net::types::EntityRef;

fn tutor() -> Tutor {
    Tutor {
        id: "t1".to_owned(),
        name: "Kasun Perera".to_owned(),
        email: "kasun@example.lk".to_owned(),
        phone: "0771234567".to_owned(),
        gender: "male".to_owned(),
        tutor_type: "Undergraduate".to_owned(),
        subjects: vec![EntityRef::new("maths", "Mathematics")],
        bio: None,
        status: TutorStatus::Approved,
        created_at: None,
        updated_at: None,
    }
}

fn request() -> TutorRequest {
    TutorRequest {
        id: "r1".to_owned(),
        name: "Ayesha".to_owned(),
        phone: "+94 71 555 1234".to_owned(),
        email: None,
        grade: EntityRef::new("g9", "Grade 9"),
        subject: EntityRef::new("sci", "Science"),
        location: "Colombo 05".to_owned(),
        mode: LessonMode::Hybrid,
        status: RequestStatus::Assigned,
        assigned_tutors: vec![EntityRef::new("t1", "Kasun Perera")],
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn tutor_edit_round_trips_with_camel_case_keys() {
    let form = TutorForm::from_record(&tutor());
    assert_eq!(form.subjects, vec!["maths".to_owned()]);
    assert_eq!(form.status, TutorStatus::Approved);

    let json = serde_json::to_value(form.validate().unwrap()).unwrap();
    assert_eq!(json["tutorType"], "Undergraduate");
    assert_eq!(json["status"], "approved");
    assert!(json.get("bio").is_none());
}

#[test]
fn tutor_contact_details_are_checked() {
    let form = TutorForm { email: "kasun".to_owned(), phone: "123".to_owned(), ..TutorForm::from_record(&tutor()) };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("email"), Some("Enter a valid email address"));
    assert_eq!(errors.get("phone"), Some("Enter a valid phone number"));
}

#[test]
fn tutor_needs_a_subject() {
    let form = TutorForm { subjects: vec![], ..TutorForm::from_record(&tutor()) };
    assert_eq!(form.validate().unwrap_err().get("subjects"), Some("At least one subject is required"));
}

#[test]
fn request_email_is_optional_but_checked() {
    let form = TutorRequestForm::from_record(&request());
    assert_eq!(form.validate().unwrap().email, None);

    let form = TutorRequestForm { email: "not-an-email".to_owned(), ..form };
    assert_eq!(form.validate().unwrap_err().get("email"), Some("Enter a valid email address"));
}

#[test]
fn request_edit_keeps_mode_and_status() {
    let payload = TutorRequestForm::from_record(&request()).validate().unwrap();
    assert_eq!(payload.mode, LessonMode::Hybrid);
    assert_eq!(payload.status, RequestStatus::Assigned);
    assert_eq!(payload.grade, "g9");
}
