//! Cursor pagination over a task's comments

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::todoist::{Comment, TaskApi, TodoistError, TodoistResult};

/// Fetch every comment of a task, in page order
///
/// Pages are requested one after another until a page comes back without a
/// cursor. A comment ID seen on an earlier page is dropped. Fails with
/// [`TodoistError::PaginationExhausted`] when `max_pages` pages have been
/// read and the stream still continues; any page failure fails the walk.
pub async fn fetch_all_comments(
    api: &dyn TaskApi,
    task_id: &str,
    max_pages: usize,
) -> TodoistResult<Vec<Comment>> {
    let max_pages = max_pages.max(1);
    let mut comments = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0;

    loop {
        let page = api.get_comments(task_id, cursor.as_deref()).await?;
        pages += 1;
        let next = page.cursor().map(str::to_string);

        for comment in page.results {
            if seen.insert(comment.id.clone()) {
                comments.push(comment);
            } else {
                debug!(comment_id = %comment.id, "dropping repeated comment");
            }
        }

        match next {
            None => break,
            Some(_) if pages >= max_pages => {
                warn!(task_id, pages, "comment pagination hit the page limit");
                return Err(TodoistError::PaginationExhausted { max_pages });
            }
            Some(next) => cursor = Some(next),
        }
    }

    debug!(task_id, pages, count = comments.len(), "fetched all comments");
    Ok(comments)
}
