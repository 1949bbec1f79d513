//! Blog post form with an ordered list of content blocks.
//!
//! Opening an approved post for editing drops it back to pending so any
//! change goes through moderation again.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use serde::Serialize;

use super::{EntityForm, FieldErrors, optional, required};
use crate::net::entities::{Blog, BlogStatus, ContentBlock};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    #[default]
    Paragraph,
    Image,
}

impl BlockKind {
    pub const ALL: [Self; 3] = [Self::Heading, Self::Paragraph, Self::Image];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Heading => "Heading",
            Self::Paragraph => "Paragraph",
            Self::Image => "Image",
        }
    }
}

/// One editable block. `text` doubles as the image caption.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockInput {
    pub kind: BlockKind,
    pub text: String,
    pub url: String,
}

impl BlockInput {
    #[must_use]
    pub fn new(kind: BlockKind) -> Self {
        Self { kind, ..Self::default() }
    }

    fn from_block(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Heading { text } => Self { kind: BlockKind::Heading, text: text.clone(), url: String::new() },
            ContentBlock::Paragraph { text } => {
                Self { kind: BlockKind::Paragraph, text: text.clone(), url: String::new() }
            }
            ContentBlock::Image { url, caption } => Self {
                kind: BlockKind::Image,
                text: caption.clone().unwrap_or_default(),
                url: url.clone(),
            },
        }
    }

    fn to_block(&self) -> Result<ContentBlock, &'static str> {
        match self.kind {
            BlockKind::Heading => optional(&self.text)
                .map(|text| ContentBlock::Heading { text })
                .ok_or("heading text is required"),
            BlockKind::Paragraph => optional(&self.text)
                .map(|text| ContentBlock::Paragraph { text })
                .ok_or("paragraph text is required"),
            BlockKind::Image => optional(&self.url)
                .map(|url| ContentBlock::Image { url, caption: optional(&self.text) })
                .ok_or("upload an image"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogForm {
    pub title: String,
    pub author_id: String,
    pub cover_image: String,
    pub content: Vec<BlockInput>,
    pub status: BlogStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub content: Vec<ContentBlock>,
    pub status: BlogStatus,
}

/// Status an edit starts from: approved posts are re-queued for review.
#[must_use]
pub fn status_for_edit(status: BlogStatus) -> BlogStatus {
    match status {
        BlogStatus::Approved => BlogStatus::Pending,
        other => other,
    }
}

impl EntityForm for BlogForm {
    type Record = Blog;
    type Payload = BlogPayload;

    fn from_record(record: &Blog) -> Self {
        Self {
            title: record.title.clone(),
            author_id: record.author.as_ref().map(|a| a.id.clone()).unwrap_or_default(),
            cover_image: record.cover_image.clone().unwrap_or_default(),
            content: record.content.iter().map(BlockInput::from_block).collect(),
            status: status_for_edit(record.status),
        }
    }

    fn validate(&self) -> Result<BlogPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        let title = required(&mut errors, "title", &self.title, "Title is required");
        if self.content.is_empty() {
            errors.insert("content", "Add at least one content block");
        }
        let content: Vec<ContentBlock> = self
            .content
            .iter()
            .enumerate()
            .filter_map(|(index, block)| match block.to_block() {
                Ok(block) => Some(block),
                Err(message) => {
                    errors.insert("content", format!("Block {}: {message}", index + 1));
                    None
                }
            })
            .collect();
        errors.finish(|| BlogPayload {
            title,
            author: optional(&self.author_id),
            cover_image: optional(&self.cover_image),
            content,
            status: self.status,
        })
    }
}
