//! Productivity stats handler implementation

use mcp_common::{json_success, CallToolResult, McpError, ResultExt};
use tracing::info;

use crate::params::ProductivityStatsParams;
use crate::todoist::RawClient;

/// Fetch completed-task statistics
pub async fn get_productivity_stats(
    raw: &RawClient,
    params: ProductivityStatsParams,
) -> Result<CallToolResult, McpError> {
    params.validate()?;

    let query = params.into_query();
    info!("Fetching productivity stats (limit: {})", query.limit);

    let stats = raw.completed_stats(&query).await.to_mcp_err()?;

    json_success(&stats)
}
