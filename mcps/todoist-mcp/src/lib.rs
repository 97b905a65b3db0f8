//! Todoist MCP Library
//!
//! MCP-compatible tools for Todoist tasks, comments, and productivity
//! statistics.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use todoist_mcp::{Config, TodoistMcpServer};
//!
//! let server = TodoistMcpServer::from_config(&Config::load()?)?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Tools
//! - `add-task`, `update-task`
//! - `get-task-comments` (optionally downloading file attachments)
//! - `get-productivity-stats`
//!
//! # Configuration
//! Set `TODOIST_API_TOKEN`, optionally configure `~/.binks/todoist.toml`

pub mod comments;
pub mod config;
pub mod handlers;
pub mod params;
pub mod server;
pub mod todoist;

#[cfg(test)]
mod fake;

// Re-export main server type
pub use config::Config;
pub use server::TodoistMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
