//! Attachment enrichment
//!
//! Comments from the v1 listing do not carry downloadable file URLs. The
//! REST v2 listing does, so raw records are matched to comments by ID and
//! each referenced file is downloaded and attached to its comment.

use futures::future::join_all;
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use tracing::{debug, warn};

use crate::todoist::{Comment, FileError, RawComment};

/// A comment plus the outcome of downloading its attachment
///
/// Carries either `rawFileContent` and `rawFileUrl`, or `rawFileError`, or
/// neither. The constructors are the only way to set them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedComment {
    #[serde(flatten)]
    comment: Comment,
    #[serde(rename = "rawFileContent", skip_serializing_if = "Option::is_none")]
    raw_file_content: Option<String>,
    #[serde(rename = "rawFileUrl", skip_serializing_if = "Option::is_none")]
    raw_file_url: Option<String>,
    #[serde(rename = "rawFileError", skip_serializing_if = "Option::is_none")]
    raw_file_error: Option<String>,
}

impl EnrichedComment {
    /// No attachment, or attachments not requested
    pub fn plain(comment: Comment) -> Self {
        Self {
            comment,
            raw_file_content: None,
            raw_file_url: None,
            raw_file_error: None,
        }
    }

    pub fn with_file(comment: Comment, url: String, content: String) -> Self {
        Self {
            raw_file_content: Some(content),
            raw_file_url: Some(url),
            ..Self::plain(comment)
        }
    }

    pub fn with_error(comment: Comment, error: String) -> Self {
        Self {
            raw_file_error: Some(error),
            ..Self::plain(comment)
        }
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn raw_file_content(&self) -> Option<&str> {
        self.raw_file_content.as_deref()
    }

    pub fn raw_file_url(&self) -> Option<&str> {
        self.raw_file_url.as_deref()
    }

    pub fn raw_file_error(&self) -> Option<&str> {
        self.raw_file_error.as_deref()
    }
}

/// Attach file contents to comments whose raw record references a file
///
/// `download` is called once per referenced file; all downloads run
/// concurrently and the output keeps the input order. A failed download is
/// recorded on its comment and does not affect the others.
pub async fn enrich_comments<F, Fut>(
    comments: Vec<Comment>,
    raw: &[RawComment],
    download: F,
) -> Vec<EnrichedComment>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String, FileError>>,
{
    let file_urls: HashMap<&str, &str> = raw
        .iter()
        .filter_map(|r| r.file_url().map(|url| (r.id.as_str(), url)))
        .collect();

    debug!(
        comments = comments.len(),
        attachments = file_urls.len(),
        "enriching comments"
    );

    let download = &download;
    let tasks = comments.into_iter().map(|comment| {
        let url = file_urls.get(comment.id.as_str()).map(|u| u.to_string());
        async move {
            let Some(url) = url else {
                return EnrichedComment::plain(comment);
            };

            match download(url.clone()).await {
                Ok(content) => EnrichedComment::with_file(comment, url, content),
                Err(e) => {
                    warn!(comment_id = %comment.id, error = %e, "attachment download failed");
                    EnrichedComment::with_error(comment, e.to_string())
                }
            }
        }
    });

    join_all(tasks).await
}
