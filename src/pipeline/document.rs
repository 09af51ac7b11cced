//! Stored documents and the requests that create or change them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Language tag given to documents created without one
pub const DEFAULT_LANGUAGE: &str = "pseudocode";

/// Title given to documents whose title is blank
pub const DEFAULT_TITLE: &str = "Untitled";

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Creates a new random document ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A saved pseudocode document
///
/// `content` is always stored in formatted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudocodeDocument {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub language: String,
    /// Creation time in milliseconds since the Unix epoch
    pub created_at_ms: u64,
    /// Last modification time in milliseconds since the Unix epoch
    pub updated_at_ms: u64,
}

impl PseudocodeDocument {
    /// A new document stamped with the current time
    pub fn new(title: impl Into<String>, content: impl Into<String>, language: impl Into<String>) -> Self {
        let now = now_ms();
        PseudocodeDocument {
            id: DocumentId::new(),
            title: title.into(),
            content: content.into(),
            language: language.into(),
            created_at_ms: now,
            updated_at_ms: now,
        }
    }
}

/// Fields for a new document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Replacement fields for an existing document
///
/// A missing `language` keeps the stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Trim a title, falling back to [`DEFAULT_TITLE`] when nothing is left
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Current time in milliseconds since the Unix epoch
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
