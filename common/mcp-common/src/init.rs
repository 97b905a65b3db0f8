//! Server startup
//!
//! Tracing goes to stderr because stdout carries the MCP protocol.

use rmcp::{ServerHandler, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for an MCP server
///
/// - Output on stderr, no ANSI colors
/// - Filtering via `RUST_LOG`, with `<crate_name>=info` added by default
/// - `LOG_FORMAT=json` switches to JSON lines for log aggregation
///
/// Can only be called once per process.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

/// Serve an already constructed server over stdio until the client hangs up
///
/// Servers that need configuration before construction build themselves in
/// `main` and hand over here.
///
/// ```rust,ignore
/// let server = TodoistMcpServer::from_config(&config)?;
/// mcp_common::serve_stdio(server).await
/// ```
pub async fn serve_stdio<S>(server: S) -> anyhow::Result<()>
where
    S: ServerHandler,
{
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
