//! Todoist API types
//!
//! Tasks and comments are passed through to the MCP client as the API
//! returned them, so only the `id` is typed and every other field is kept
//! in an opaque map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A task as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A comment as returned by the v1 comments endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One page of the comments listing
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPage {
    pub results: Vec<Comment>,
    #[serde(default, alias = "nextCursor")]
    pub next_cursor: Option<String>,
}

impl CommentPage {
    /// Cursor for the next page, if the stream continues
    ///
    /// An empty string ends the stream just like a missing cursor.
    pub fn cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}

/// A comment record from the REST v2 listing, which carries file URLs
#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    pub id: String,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl RawComment {
    /// URL of the attached file, if there is one
    pub fn file_url(&self) -> Option<&str> {
        self.attachment
            .as_ref()
            .and_then(|a| a.file_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Attachment on a raw comment; only the file URL is read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Body of a task creation request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddTaskArgs {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<String>,
}

/// Body of a task update request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
}

/// Query for the completed-tasks statistics endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct StatsQuery {
    pub limit: u32,
    pub timezone: Option<String>,
}
