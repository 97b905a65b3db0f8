//! Comment retrieval parameters

use mcp_common::McpResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::require_non_empty;

/// Parameters for fetching a task's comments
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskCommentsParams {
    #[schemars(description = "ID of the task whose comments to fetch")]
    pub task_id: String,

    #[schemars(description = "Whether to fetch file attachment contents (default: false)")]
    pub include_file_attachments: Option<bool>,
}

impl TaskCommentsParams {
    pub fn validate(&self) -> McpResult<()> {
        require_non_empty("taskId", &self.task_id)
    }

    pub fn include_attachments(&self) -> bool {
        self.include_file_attachments.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attachments_default_off() {
        let params: TaskCommentsParams =
            serde_json::from_value(json!({ "taskId": "123" })).unwrap();
        assert!(params.validate().is_ok());
        assert!(!params.include_attachments());
    }

    #[test]
    fn test_attachments_requested() {
        let params: TaskCommentsParams = serde_json::from_value(json!({
            "taskId": "123",
            "includeFileAttachments": true
        }))
        .unwrap();
        assert!(params.include_attachments());
    }

    #[test]
    fn test_missing_task_id_fails_to_parse() {
        let parsed: Result<TaskCommentsParams, _> = serde_json::from_value(json!({}));
        assert!(parsed.is_err());
    }
}
