//! Requests the typed client does not cover
//!
//! Built from a [`TaskApi`](super::TaskApi)'s [`Credentials`], so the stats
//! endpoint, the legacy comments listing, and attachment downloads all
//! authenticate the same way as the typed calls.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use super::client::{read_json, Credentials};
use super::error::{FileError, TodoistResult};
use super::types::{RawComment, StatsQuery};

#[derive(Clone)]
pub struct RawClient {
    http: Client,
    credentials: Credentials,
    legacy_base_url: String,
}

impl RawClient {
    pub fn new(http: Client, credentials: Credentials, legacy_base_url: impl Into<String>) -> Self {
        Self {
            http,
            credentials,
            legacy_base_url: legacy_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Completed-task statistics, returned as the API sent them
    #[instrument(skip(self))]
    pub async fn completed_stats(&self, query: &StatsQuery) -> TodoistResult<Value> {
        debug!("fetching productivity stats");

        let mut params = vec![("limit", query.limit.to_string())];
        if let Some(ref tz) = query.timezone {
            params.push(("timezone", tz.clone()));
        }

        let response = self
            .http
            .get(self.credentials.url("/api/v1/tasks/completed/stats"))
            .bearer_auth(self.credentials.bearer_token())
            .query(&params)
            .send()
            .await?;

        read_json(response).await
    }

    /// All comments of a task from the REST v2 listing, unpaginated
    ///
    /// Unlike the v1 listing these records carry `attachment.file_url`.
    #[instrument(skip(self))]
    pub async fn legacy_comments(&self, task_id: &str) -> TodoistResult<Vec<RawComment>> {
        debug!("fetching raw comments");

        let response = self
            .http
            .get(format!("{}/rest/v2/comments", self.legacy_base_url))
            .bearer_auth(self.credentials.bearer_token())
            .query(&[("task_id", task_id)])
            .send()
            .await?;

        read_json(response).await
    }

    /// Download a file, following redirects, and read the body as text
    #[instrument(skip(self))]
    pub async fn download_file(&self, url: &str) -> Result<String, FileError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(self.credentials.bearer_token())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FileError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
