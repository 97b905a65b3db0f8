//! Result helpers for MCP tool responses
//!
//! Tools answer with text content blocks holding pretty-printed JSON.

use rmcp::{
    model::{CallToolResult, Content, RawContent},
    ErrorData as McpError,
};
use serde::Serialize;

use crate::error::ResultExt;

/// Serialize `data` into a single pretty-printed JSON text block
///
/// ```rust,ignore
/// let task = api.add_task(&args).await.to_mcp_err()?;
/// json_success(&task)
/// ```
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data).to_mcp_err()?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Serialize each item into its own pretty-printed JSON text block
///
/// An empty slice produces a successful result with no content blocks.
pub fn json_items_success<T: Serialize>(items: &[T]) -> Result<CallToolResult, McpError> {
    let contents = items
        .iter()
        .map(|item| serde_json::to_string_pretty(item).map(Content::text))
        .collect::<Result<Vec<_>, _>>()
        .to_mcp_err()?;
    Ok(CallToolResult::success(contents))
}

/// Collect the text of every text block in a result, in order
///
/// Non-text blocks are skipped.
pub fn text_of(result: &CallToolResult) -> Vec<&str> {
    result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect()
}
