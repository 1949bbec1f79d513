//! Shared wire DTOs for the admin UI and the TutorMe REST backend.
//!
//! DESIGN
//! ======
//! The backend is an external collaborator, so these types are lenient on
//! input (`_id` aliases, populated-or-bare references, optional timestamps)
//! and strict on output (camelCase keys the backend expects).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Default page size for list screens.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page size used when a list is loaded to populate a select control.
pub const OPTIONS_PAGE_SIZE: u32 = 100;

// =============================================================================
// PAGINATION
// =============================================================================

/// Paginated list envelope returned by every `GET /v1/{resource}` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub results: Vec<T>,
    pub page: u32,
    #[serde(default)]
    pub limit: Option<u32>,
    pub total_pages: u32,
    pub total_results: u64,
}

impl<T> Page<T> {
    /// An empty first page, used before anything has loaded.
    #[must_use]
    pub fn empty() -> Self {
        Self { results: Vec::new(), page: 1, limit: None, total_pages: 0, total_results: 0 }
    }
}

/// Query parameters for a list request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: Option<&'static str>,
}

impl ListQuery {
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self { page: page.max(1), limit: DEFAULT_PAGE_SIZE, sort_by: None }
    }

    /// First page large enough to fill a dropdown.
    #[must_use]
    pub fn options() -> Self {
        Self { page: 1, limit: OPTIONS_PAGE_SIZE, sort_by: None }
    }

    /// Smallest possible page; only `totalResults` is of interest.
    #[must_use]
    pub fn count() -> Self {
        Self { page: 1, limit: 1, sort_by: None }
    }

    #[must_use]
    pub fn with_sort(mut self, sort_by: Option<&'static str>) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Render as a query string without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = format!("page={}&limit={}", self.page, self.limit);
        if let Some(sort_by) = self.sort_by {
            out.push_str("&sortBy=");
            out.push_str(sort_by);
        }
        out
    }
}

// =============================================================================
// USERS & SESSION
// =============================================================================

/// Role carried by the session user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    Tutor,
    #[default]
    #[serde(other)]
    User,
}

/// The signed-in account as returned by `/v1/auth/me` and `/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    #[serde(default)]
    pub expires: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: AccessToken,
}

/// Body of a successful `POST /v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub tokens: AuthTokens,
}

/// Body of a successful `POST /api/upload`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

// =============================================================================
// REFERENCES
// =============================================================================

/// A relation to another resource.
///
/// The backend sends either a populated object (`{"id": .., "title": ..}`) or
/// a bare id string depending on the endpoint; both decode to this type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EntityRef {
    pub id: String,
    pub title: String,
}

impl EntityRef {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into() }
    }
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        entity_ref_from_value(&value).ok_or_else(|| D::Error::custom("expected id string or object with id"))
    }
}

fn entity_ref_from_value(value: &serde_json::Value) -> Option<EntityRef> {
    match value {
        serde_json::Value::String(id) => Some(EntityRef { id: id.clone(), title: String::new() }),
        serde_json::Value::Object(map) => {
            let id = map
                .get("id")
                .or_else(|| map.get("_id"))
                .and_then(serde_json::Value::as_str)?;
            let title = ["title", "name", "question"]
                .iter()
                .find_map(|k| map.get(*k).and_then(serde_json::Value::as_str))
                .unwrap_or_default();
            Some(EntityRef { id: id.to_owned(), title: title.to_owned() })
        }
        _ => None,
    }
}

/// Deserialize an optional reference, treating `null` as absent.
pub(crate) fn deserialize_opt_ref<'de, D>(deserializer: D) -> Result<Option<EntityRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(v) => entity_ref_from_value(&v)
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected id string or object with id")),
    }
}

/// Accept integer or float JSON numbers (and numeric strings) as `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn deserialize_u32_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| D::Error::custom(format!("expected non-negative number, got {value}")))
}
