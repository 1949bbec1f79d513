use super::*;
use crate::net::types::EntityRef;

fn filled() -> PaperForm {
    PaperForm {
        title: "Mathematics Term Test".to_owned(),
        year: "2023".to_owned(),
        grade: "g6".to_owned(),
        subject: "maths".to_owned(),
        url: "https://files.example/papers/1-maths.pdf".to_owned(),
    }
}

#[test]
fn valid_paper_produces_numeric_year() {
    let payload = filled().validate().unwrap();
    assert_eq!(payload.year, 2023);
    assert_eq!(payload.grade, "g6");
}

#[test]
fn year_must_be_in_range() {
    for bad in ["", "20x3", "1800", "3000"] {
        let form = PaperForm { year: bad.to_owned(), ..filled() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("year"), Some("Enter a valid year"), "year {bad:?}");
    }
}

#[test]
fn missing_upload_is_reported() {
    let form = PaperForm { url: String::new(), ..filled() };
    assert_eq!(form.validate().unwrap_err().get("url"), Some("Upload the paper file"));
}

#[test]
fn edit_prefills_reference_ids() {
    let paper = Paper {
        id: "p1".to_owned(),
        title: "Science".to_owned(),
        year: 2021,
        grade: EntityRef::new("g7", "Grade 7"),
        subject: EntityRef::new("sci", "Science"),
        url: "https://files.example/p1.pdf".to_owned(),
        created_at: None,
        updated_at: None,
    };
    let form = PaperForm::from_record(&paper);
    assert_eq!(form.year, "2021");
    assert_eq!(form.grade, "g7");
    assert_eq!(form.subject, "sci");
}
