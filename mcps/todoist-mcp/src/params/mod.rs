//! Parameter types for Todoist MCP tools
//!
//! Every parameter type validates itself before the handler makes any
//! outbound call. Field names are camelCase on the wire.

mod comment;
mod stats;
mod task;

pub use comment::*;
pub use stats::*;
pub use task::*;

use chrono::NaiveDate;
use mcp_common::{invalid_params, McpResult};

/// Lowest and highest task priority (1 normal, 4 urgent)
pub const PRIORITY_RANGE: std::ops::RangeInclusive<u8> = 1..=4;

fn require_non_empty(name: &str, value: &str) -> McpResult<()> {
    if value.trim().is_empty() {
        return Err(invalid_params(format!("{} must not be empty", name)));
    }
    Ok(())
}

fn check_priority(priority: Option<u8>) -> McpResult<()> {
    match priority {
        Some(p) if !PRIORITY_RANGE.contains(&p) => Err(invalid_params(format!(
            "priority must be between {} and {}, got {}",
            PRIORITY_RANGE.start(),
            PRIORITY_RANGE.end(),
            p
        ))),
        _ => Ok(()),
    }
}

/// Dates are plain `YYYY-MM-DD`
fn check_date(name: &str, value: Option<&str>) -> McpResult<()> {
    if let Some(date) = value {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            invalid_params(format!("{} must be a YYYY-MM-DD date, got '{}'", name, date))
        })?;
    }
    Ok(())
}
