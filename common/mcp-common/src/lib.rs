//! MCP Common - shared plumbing for MCP servers
//!
//! - **Startup**: [`init_tracing`] and [`serve_stdio`] for stdio servers
//! - **Results**: helpers that turn serializable data into `CallToolResult`s
//! - **Errors**: conversions into `rmcp::ErrorData`
//! - **Embeddable**: [`EmbeddableMcp`] for calling tools in-process
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{json_items_success, json_success};
//!
//! fn add_task(&self) -> Result<CallToolResult, McpError> {
//!     let task = create_the_task()?;
//!     json_success(&task)
//! }
//!
//! fn get_comments(&self) -> Result<CallToolResult, McpError> {
//!     let comments = fetch_all_comments()?;
//!     // one text block per comment
//!     json_items_success(&comments)
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::{init_tracing, serve_stdio};
pub use result::{json_items_success, json_success, text_of};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
