//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host (or a test) call a server's tools directly,
//! without a stdio transport in between.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//!
//! let server = TodoistMcpServer::from_config(&config)?;
//! let result = server
//!     .call_tool("get-task-comments", serde_json::json!({ "taskId": "123" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embedded tool calls
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with that name
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments did not deserialize into the tool's parameter type
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// The tool itself returned an MCP error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be called in-process
///
/// Servers built on rmcp's `#[tool_router]` implement this by listing their
/// router and dispatching on the tool name.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All tools with their input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Run a tool by name with JSON arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }
}
