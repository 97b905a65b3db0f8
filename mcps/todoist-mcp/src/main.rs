//! Todoist MCP Server
//!
//! Exposes Todoist task, comment, and productivity tools over stdio.
//!
//! # Configuration
//! Set `TODOIST_API_TOKEN`, optionally configure `~/.binks/todoist.toml`
//! (or point `TODOIST_MCP_CONFIG_PATH` at another file).

use todoist_mcp::{Config, TodoistMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("todoist_mcp")?;

    tracing::info!("Starting Todoist MCP Server");

    let config = Config::load()?;
    tracing::info!("Todoist API: {}", config.api.base_url);

    let server = TodoistMcpServer::from_config(&config)?;
    mcp_common::serve_stdio(server).await
}
