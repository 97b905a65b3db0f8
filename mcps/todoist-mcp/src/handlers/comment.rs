//! Comment handler implementations

use mcp_common::{json_items_success, CallToolResult, McpError, ResultExt};
use tracing::info;

use crate::comments::fetch_task_comments;
use crate::params::TaskCommentsParams;
use crate::todoist::{RawClient, TaskApi};

/// Fetch all comments of a task, one content block per comment
pub async fn get_task_comments(
    api: &dyn TaskApi,
    raw: &RawClient,
    max_pages: usize,
    params: TaskCommentsParams,
) -> Result<CallToolResult, McpError> {
    params.validate()?;

    let include_attachments = params.include_attachments();
    info!(
        "Fetching comments for task {} (attachments: {})",
        params.task_id, include_attachments
    );

    let comments = fetch_task_comments(
        api,
        raw,
        &params.task_id,
        include_attachments,
        max_pages,
    )
    .await
    .to_mcp_err()?;

    json_items_success(&comments)
}
