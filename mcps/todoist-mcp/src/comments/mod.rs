//! Comment retrieval for a task
//!
//! [`walker`] follows the comment cursor to the end of the stream;
//! [`enrich`] optionally downloads file attachments onto the comments.

pub mod enrich;
pub mod walker;

pub use enrich::{enrich_comments, EnrichedComment};
pub use walker::fetch_all_comments;

use tracing::instrument;

use crate::todoist::{RawClient, TaskApi, TodoistResult};

/// All comments of a task, with attachment contents when requested
///
/// Without attachments only the paginated listing is read. With them, the
/// raw listing is fetched once after pagination completes and every
/// referenced file is downloaded.
#[instrument(skip(api, raw))]
pub async fn fetch_task_comments(
    api: &dyn TaskApi,
    raw: &RawClient,
    task_id: &str,
    include_attachments: bool,
    max_pages: usize,
) -> TodoistResult<Vec<EnrichedComment>> {
    let comments = fetch_all_comments(api, task_id, max_pages).await?;

    if !include_attachments {
        return Ok(comments.into_iter().map(EnrichedComment::plain).collect());
    }

    let raw_comments = raw.legacy_comments(task_id).await?;
    let enriched = enrich_comments(comments, &raw_comments, |url| async move {
        raw.download_file(&url).await
    })
    .await;

    Ok(enriched)
}
