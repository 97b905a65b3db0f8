//! Productivity statistics parameters

use mcp_common::{invalid_params, McpResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::todoist::StatsQuery;

/// Days of history included when no limit is given, and the most allowed
pub const MAX_STATS_DAYS: u32 = 30;

/// Parameters for fetching productivity statistics
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityStatsParams {
    #[schemars(
        description = "Number of days to include in statistics (default and max: 30)",
        range(min = 1, max = 30)
    )]
    pub limit: Option<u32>,

    #[schemars(description = "Timezone to use for statistics (IANA timezone format)")]
    pub timezone: Option<String>,
}

impl ProductivityStatsParams {
    pub fn validate(&self) -> McpResult<()> {
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_STATS_DAYS {
                return Err(invalid_params(format!(
                    "limit must be between 1 and {}, got {}",
                    MAX_STATS_DAYS, limit
                )));
            }
        }
        if matches!(self.timezone.as_deref(), Some(tz) if tz.trim().is_empty()) {
            return Err(invalid_params("timezone must not be empty"));
        }
        Ok(())
    }

    pub fn into_query(self) -> StatsQuery {
        StatsQuery {
            limit: self.limit.unwrap_or(MAX_STATS_DAYS),
            timezone: self.timezone,
        }
    }
}
