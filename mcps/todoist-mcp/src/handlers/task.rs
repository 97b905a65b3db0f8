//! Task handler implementations

use mcp_common::{json_success, CallToolResult, McpError, ResultExt};
use tracing::info;

use crate::params::{AddTaskParams, UpdateTaskParams};
use crate::todoist::TaskApi;

/// Create a task
pub async fn add_task(api: &dyn TaskApi, params: AddTaskParams) -> Result<CallToolResult, McpError> {
    params.validate()?;

    info!("Adding task");
    let task = api.add_task(&params.into_args()).await.to_mcp_err()?;

    json_success(&task)
}

/// Update a task
pub async fn update_task(
    api: &dyn TaskApi,
    params: UpdateTaskParams,
) -> Result<CallToolResult, McpError> {
    params.validate()?;

    let (task_id, args) = params.into_args();
    info!("Updating task {}", task_id);
    let task = api.update_task(&task_id, &args).await.to_mcp_err()?;

    json_success(&task)
}
