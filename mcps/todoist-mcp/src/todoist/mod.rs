//! Todoist API access
//!
//! Typed client, raw requests, API types, and error types.

pub mod client;
pub mod error;
pub mod raw;
pub mod types;

pub use client::{build_http_client, Credentials, TaskApi, TodoistClient};
pub use error::{FileError, TodoistError, TodoistResult};
pub use raw::RawClient;
pub use types::{
    AddTaskArgs, Attachment, Comment, CommentPage, RawComment, StatsQuery, Task, UpdateTaskArgs,
};
