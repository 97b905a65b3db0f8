//! Handler implementations for Todoist MCP tools
//!
//! Organized by domain: task, comment, stats

mod comment;
mod stats;
mod task;

pub use comment::*;
pub use stats::*;
pub use task::*;

use mcp_common::{internal_error, IntoMcpError, McpError};

use crate::todoist::TodoistError;

// Upstream failures are internal errors; the message keeps the status and
// body excerpt.
impl IntoMcpError for TodoistError {
    fn into_mcp_error(self) -> McpError {
        internal_error(self.to_string())
    }
}
