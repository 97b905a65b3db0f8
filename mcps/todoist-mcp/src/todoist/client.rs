//! Typed Todoist API client
//!
//! [`TaskApi`] is the seam the tool handlers and the comment walker are
//! written against. [`TodoistClient`] implements it over HTTP.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::error::{TodoistError, TodoistResult};
use super::types::{AddTaskArgs, CommentPage, Task, UpdateTaskArgs};

/// Base URL and bearer token for authenticated requests
///
/// Exposed by every [`TaskApi`] so that requests the typed client does not
/// cover are built from the same credentials.
#[derive(Clone)]
pub struct Credentials {
    base_url: String,
    token: String,
}

impl Credentials {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: token.into(),
        }
    }

    /// API base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bearer_token(&self) -> &str {
        &self.token
    }

    /// Join an absolute API path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Capabilities required from the Todoist API
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Credentials used for this client's own requests
    fn credentials(&self) -> &Credentials;

    async fn add_task(&self, args: &AddTaskArgs) -> TodoistResult<Task>;

    async fn update_task(&self, task_id: &str, args: &UpdateTaskArgs) -> TodoistResult<Task>;

    /// Fetch one page of a task's comments
    async fn get_comments(&self, task_id: &str, cursor: Option<&str>)
        -> TodoistResult<CommentPage>;
}

/// Build the shared HTTP client
///
/// Redirects are followed with reqwest's default policy.
pub fn build_http_client(timeout: Duration) -> TodoistResult<Client> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(concat!("todoist-mcp/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Turn a response into `T`, or into [`TodoistError::Api`] on a non-2xx status
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> TodoistResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        error!(status = status.as_u16(), "Todoist API request failed");
        return Err(TodoistError::api(status.as_u16(), &body));
    }

    Ok(serde_json::from_str(&body)?)
}

/// HTTP implementation of [`TaskApi`]
#[derive(Clone)]
pub struct TodoistClient {
    http: Client,
    credentials: Credentials,
}

impl TodoistClient {
    pub fn new(http: Client, credentials: Credentials) -> Self {
        Self { http, credentials }
    }
}

#[async_trait]
impl TaskApi for TodoistClient {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[instrument(skip(self, args))]
    async fn add_task(&self, args: &AddTaskArgs) -> TodoistResult<Task> {
        debug!("creating task");

        let response = self
            .http
            .post(self.credentials.url("/api/v1/tasks"))
            .bearer_auth(self.credentials.bearer_token())
            .json(args)
            .send()
            .await?;

        read_json(response).await
    }

    #[instrument(skip(self, args))]
    async fn update_task(&self, task_id: &str, args: &UpdateTaskArgs) -> TodoistResult<Task> {
        debug!("updating task");

        let response = self
            .http
            .post(self.credentials.url(&format!("/api/v1/tasks/{}", task_id)))
            .bearer_auth(self.credentials.bearer_token())
            .json(args)
            .send()
            .await?;

        read_json(response).await
    }

    #[instrument(skip(self))]
    async fn get_comments(
        &self,
        task_id: &str,
        cursor: Option<&str>,
    ) -> TodoistResult<CommentPage> {
        debug!("fetching comment page");

        let mut query = vec![("task_id", task_id)];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor));
        }

        let response = self
            .http
            .get(self.credentials.url("/api/v1/comments"))
            .bearer_auth(self.credentials.bearer_token())
            .query(&query)
            .send()
            .await?;

        read_json(response).await
    }
}
