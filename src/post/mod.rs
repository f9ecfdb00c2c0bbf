//! Post model: the stored record and the caller-facing view.
//!
//! `Post` is what the repository owns and what crosses the wire (with the
//! timestamp flattened to Unix seconds). `PostView` is what the timeline hands
//! to its callers: the same fields plus derived display data, re-computed on
//! every conversion and never stored.

mod derived;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub use derived::{contains_images, image_urls, is_infrastructure_related};

/// A post as stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub owner_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Creation time as Unix seconds, the wire representation.
    pub fn created_at_unix(&self) -> i64 {
        self.created_at.timestamp()
    }

    pub fn image_urls(&self) -> Vec<String> {
        image_urls(&self.content)
    }

    pub fn is_infrastructure_related(&self) -> bool {
        is_infrastructure_related(&self.content)
    }
}

/// A post ready for rendering: RFC 3339 timestamp plus derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub owner_id: String,
    pub content: String,
    pub created_at: String,
    pub image_urls: Vec<String>,
    pub infrastructure_related: bool,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        let image_urls = post.image_urls();
        let infrastructure_related = post.is_infrastructure_related();
        Self {
            created_at: format_timestamp(&post.created_at),
            id: post.id,
            owner_id: post.owner_id,
            content: post.content,
            image_urls,
            infrastructure_related,
        }
    }
}

/// Format an instant the way the timeline exposes it (`2024-05-01T12:00:00Z`).
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Outcome of a delete, reported instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
}
