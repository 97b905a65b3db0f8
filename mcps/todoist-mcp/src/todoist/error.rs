//! Error types for Todoist API calls

use thiserror::Error;

/// Longest slice of an error response body kept in [`TodoistError::Api`]
const BODY_EXCERPT_LEN: usize = 200;

/// Errors that can occur when talking to the Todoist API
#[derive(Error, Debug)]
pub enum TodoistError {
    /// The API answered with a non-2xx status
    #[error("Todoist API error: {status} {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Start of the response body
        body: String,
    },

    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON we expected
    #[error("failed to parse Todoist response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The comment stream still had a cursor after the page limit
    #[error("pagination exhausted: comments still pending after {max_pages} pages")]
    PaginationExhausted {
        /// Configured page limit that was hit
        max_pages: usize,
    },

    /// No API token configured
    #[error("no Todoist API token configured - set TODOIST_API_TOKEN")]
    MissingToken,
}

impl TodoistError {
    /// Build an [`TodoistError::Api`] keeping only the start of the body
    pub fn api(status: u16, body: &str) -> Self {
        let body = match body.char_indices().nth(BODY_EXCERPT_LEN) {
            Some((idx, _)) => body[..idx].to_string(),
            None => body.to_string(),
        };
        TodoistError::Api { status, body }
    }
}

/// Result type alias for Todoist operations
pub type TodoistResult<T> = Result<T, TodoistError>;

/// Why an attachment download produced no content
///
/// Never fatal: the message is recorded on the comment instead.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
