//! Record types for every resource the dashboard manages.
//!
//! Each record mirrors one backend collection. Relations are `EntityRef`s so
//! both populated and id-only responses decode.

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;

use serde::{Deserialize, Serialize};

use super::resource::{Choice, Resource};
use super::types::{EntityRef, User, deserialize_opt_ref, deserialize_u32_lenient};

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

choice_enum!(
    /// How lessons are delivered.
    LessonMode {
        Online => ("online", "Online"),
        Physical => ("physical", "Physical"),
        Hybrid => ("hybrid", "Hybrid"),
    }
);

choice_enum!(
    /// Whether an assignment is still accepting tutors.
    AssignmentStatus {
        Open => ("open", "Open"),
        Closed => ("closed", "Closed"),
    }
);

choice_enum!(
    /// Moderation state of a blog post.
    BlogStatus {
        Pending => ("pending", "Pending"),
        Approved => ("approved", "Approved"),
        Rejected => ("rejected", "Rejected"),
    }
);

choice_enum!(
    /// Moderation state of a tutor profile.
    TutorStatus {
        Pending => ("pending", "Pending"),
        Approved => ("approved", "Approved"),
        Rejected => ("rejected", "Rejected"),
    }
);

choice_enum!(
    /// Progress of a student's tutor request.
    RequestStatus {
        Pending => ("pending", "Pending"),
        Assigned => ("assigned", "Assigned"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
    }
);

// =============================================================================
// CATALOGUE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub subjects: Vec<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Education level (e.g. Primary, O/L, A/L).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A past paper document hosted in blob storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "deserialize_u32_lenient")]
    pub year: u32,
    pub grade: EntityRef,
    pub subject: EntityRef,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One pricing band within a tuition rate, e.g. "Full-time teachers".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTier {
    pub category: String,
    #[serde(deserialize_with = "deserialize_u32_lenient")]
    pub min_rate: u32,
    #[serde(deserialize_with = "deserialize_u32_lenient")]
    pub max_rate: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TuitionRate {
    #[serde(alias = "_id")]
    pub id: String,
    pub grade: EntityRef,
    pub subject: EntityRef,
    #[serde(default)]
    pub tiers: Vec<RateTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// =============================================================================
// MARKETPLACE
// =============================================================================

/// A tuition job posted for tutors to apply to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub grade: EntityRef,
    pub subject: EntityRef,
    pub location: String,
    #[serde(default)]
    pub mode: LessonMode,
    #[serde(deserialize_with = "deserialize_u32_lenient")]
    pub rate: u32,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading {
        text: String,
    },
    /// Markdown body text.
    Paragraph {
        text: String,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_opt_ref")]
    pub author: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(alias = "_id")]
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: String,
    /// e.g. "Full-time teacher", "Undergraduate".
    #[serde(default)]
    pub tutor_type: String,
    #[serde(default)]
    pub subjects: Vec<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub status: TutorStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A student's (or parent's) request to be matched with a tutor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRequest {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub grade: EntityRef,
    pub subject: EntityRef,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub mode: LessonMode,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub assigned_tutors: Vec<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// =============================================================================
// RESOURCE IMPLS
// =============================================================================

impl Resource for Grade {
    const PATH: &'static str = "grades";
    const LABEL: &'static str = "Grade";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }
}

impl Resource for Subject {
    const PATH: &'static str = "subjects";
    const LABEL: &'static str = "Subject";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }
}

impl Resource for Level {
    const PATH: &'static str = "levels";
    const LABEL: &'static str = "Level";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }
}

impl Resource for Paper {
    const PATH: &'static str = "papers";
    const LABEL: &'static str = "Paper";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

impl Resource for TuitionRate {
    const PATH: &'static str = "tuition-rates";
    const LABEL: &'static str = "Tuition Rate";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.grade.title, self.subject.title)
    }
}

impl Resource for Assignment {
    const PATH: &'static str = "assignments";
    const LABEL: &'static str = "Assignment";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }
}

impl Resource for Blog {
    const PATH: &'static str = "blogs";
    const LABEL: &'static str = "Blog";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn delete_blocked_reason(&self) -> Option<&'static str> {
        (self.status != BlogStatus::Rejected).then_some("Only rejected blogs can be deleted.")
    }
}

impl Resource for Faq {
    const PATH: &'static str = "faqs";
    const LABEL: &'static str = "FAQ";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.question.clone()
    }
}

impl Resource for Tutor {
    const PATH: &'static str = "tutors";
    const LABEL: &'static str = "Tutor";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Resource for TutorRequest {
    const PATH: &'static str = "tutor-requests";
    const LABEL: &'static str = "Tutor Request";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.name, self.subject.title)
    }
}

/// Accounts are listed only to pick blog authors.
impl Resource for User {
    const PATH: &'static str = "users";
    const LABEL: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}
