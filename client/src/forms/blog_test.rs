use super::*;
use crate::net::types::EntityRef;

fn blog(status: BlogStatus) -> Blog {
    Blog {
        id: "b1".to_owned(),
        title: "Preparing for O/L".to_owned(),
        author: Some(EntityRef::new("u1", "Nimali")),
        cover_image: Some("https://files.example/cover.png".to_owned()),
        content: vec![
            ContentBlock::Heading { text: "Start early".to_owned() },
            ContentBlock::Paragraph { text: "Revise **daily**.".to_owned() },
            ContentBlock::Image { url: "https://files.example/desk.png".to_owned(), caption: None },
        ],
        status,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn approved_blog_is_requeued_on_edit() {
    assert_eq!(BlogForm::from_record(&blog(BlogStatus::Approved)).status, BlogStatus::Pending);
}

#[test]
fn pending_and_rejected_are_kept_on_edit() {
    assert_eq!(BlogForm::from_record(&blog(BlogStatus::Pending)).status, BlogStatus::Pending);
    assert_eq!(BlogForm::from_record(&blog(BlogStatus::Rejected)).status, BlogStatus::Rejected);
}

#[test]
fn nested_author_becomes_author_id() {
    let form = BlogForm::from_record(&blog(BlogStatus::Pending));
    assert_eq!(form.author_id, "u1");
    let payload = form.validate().unwrap();
    assert_eq!(payload.author.as_deref(), Some("u1"));
}

#[test]
fn content_blocks_survive_edit() {
    let original = blog(BlogStatus::Pending);
    let payload = BlogForm::from_record(&original).validate().unwrap();
    assert_eq!(payload.content, original.content);
}

#[test]
fn payload_uses_wire_names() {
    let payload = BlogForm::from_record(&blog(BlogStatus::Approved)).validate().unwrap();
    let json = serde_json::to_value(payload).unwrap();
    assert_eq!(json["coverImage"], "https://files.example/cover.png");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["content"][0], serde_json::json!({"type": "heading", "text": "Start early"}));
}

#[test]
fn empty_content_is_rejected() {
    let form = BlogForm { title: "Draft".to_owned(), ..BlogForm::default() };
    assert_eq!(form.validate().unwrap_err().get("content"), Some("Add at least one content block"));
}

#[test]
fn image_block_needs_upload() {
    let form = BlogForm {
        title: "Draft".to_owned(),
        content: vec![BlockInput::new(BlockKind::Paragraph), BlockInput::new(BlockKind::Image)],
        ..BlogForm::default()
    };
    assert_eq!(form.validate().unwrap_err().get("content"), Some("Block 1: paragraph text is required"));

    let form = BlogForm {
        title: "Draft".to_owned(),
        content: vec![
            BlockInput { text: "Intro".to_owned(), ..BlockInput::default() },
            BlockInput::new(BlockKind::Image),
        ],
        ..BlogForm::default()
    };
    assert_eq!(form.validate().unwrap_err().get("content"), Some("Block 2: upload an image"));
}
