//! MCP Server implementation
//!
//! This module defines the main MCP server that exposes Todoist task,
//! comment, and statistics operations as tools. Handler implementations are
//! in the handlers/ module.

use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult};
use reqwest::Client;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::handlers;
use crate::params::*;
use crate::todoist::{
    build_http_client, Credentials, RawClient, TaskApi, TodoistClient, TodoistError, TodoistResult,
};

const INSTRUCTIONS: &str = "Todoist MCP Server - provides tools for creating and updating \
     Todoist tasks, reading task comments (optionally with file attachment contents), \
     and fetching productivity statistics for completed tasks.";

/// The main Todoist MCP Server
#[derive(Clone)]
pub struct TodoistMcpServer {
    api: Arc<dyn TaskApi>,
    raw: RawClient,
    max_comment_pages: usize,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl TodoistMcpServer {
    #[tool(name = "add-task", description = "Add a task to Todoist")]
    async fn add_task(
        &self,
        Parameters(params): Parameters<AddTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_task(self.api.as_ref(), params).await
    }

    #[tool(name = "update-task", description = "Update a task in Todoist")]
    async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_task(self.api.as_ref(), params).await
    }

    #[tool(
        name = "get-task-comments",
        description = "Get comments from a task in Todoist, optionally with the contents of attached files"
    )]
    async fn get_task_comments(
        &self,
        Parameters(params): Parameters<TaskCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_task_comments(self.api.as_ref(), &self.raw, self.max_comment_pages, params)
            .await
    }

    #[tool(
        name = "get-productivity-stats",
        description = "Get productivity statistics for completed tasks"
    )]
    async fn get_productivity_stats(
        &self,
        Parameters(params): Parameters<ProductivityStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_productivity_stats(&self.raw, params).await
    }
}

// ============================================================================
// Server Initialization
// ============================================================================

impl TodoistMcpServer {
    /// Build the HTTP client and API client from configuration
    ///
    /// Fails with [`TodoistError::MissingToken`] when no token is configured.
    pub fn from_config(config: &Config) -> TodoistResult<Self> {
        let token = config
            .api
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(TodoistError::MissingToken)?;

        let http = build_http_client(Duration::from_secs(config.api.timeout_seconds))?;
        let client = TodoistClient::new(
            http.clone(),
            Credentials::new(config.api.base_url.as_str(), token),
        );

        Ok(Self::with_api(Arc::new(client), http, config))
    }

    /// Use an existing [`TaskApi`]; raw requests reuse its credentials
    pub fn with_api(api: Arc<dyn TaskApi>, http: Client, config: &Config) -> Self {
        let raw = RawClient::new(
            http,
            api.credentials().clone(),
            config.api.legacy_base_url.as_str(),
        );

        Self {
            api,
            raw,
            max_comment_pages: config.comments.max_pages,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TodoistMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for TodoistMcpServer {
    fn server_name(&self) -> &str {
        "todoist"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "add-task" => {
                let params: AddTaskParams = serde_json::from_value(params)?;
                self.add_task(Parameters(params)).await.map_err(Into::into)
            }

            "update-task" => {
                let params: UpdateTaskParams = serde_json::from_value(params)?;
                self.update_task(Parameters(params)).await.map_err(Into::into)
            }

            "get-task-comments" => {
                let params: TaskCommentsParams = serde_json::from_value(params)?;
                self.get_task_comments(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "get-productivity-stats" => {
                let params: ProductivityStatsParams = serde_json::from_value(params)?;
                self.get_productivity_stats(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
