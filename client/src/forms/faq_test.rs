use super::*;

#[test]
fn question_and_answer_are_required() {
    let errors = FaqForm::default().validate().unwrap_err();
    assert_eq!(errors.get("question"), Some("Question is required"));
    assert_eq!(errors.get("answer"), Some("Answer is required"));
    assert_eq!(errors.get("category"), None);
}

#[test]
fn edit_round_trips() {
    let faq = Faq {
        id: "f1".to_owned(),
        question: "How do I register as a tutor?".to_owned(),
        answer: "Use the **Join** page.".to_owned(),
        category: Some("Tutors".to_owned()),
        created_at: None,
        updated_at: None,
    };
    let payload = FaqForm::from_record(&faq).validate().unwrap();
    assert_eq!(payload.question, faq.question);
    assert_eq!(payload.answer, faq.answer);
    assert_eq!(payload.category, faq.category);
}
