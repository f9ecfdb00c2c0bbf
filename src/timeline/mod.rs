//! Timeline aggregation: one page of recent posts from everyone a user follows.
//!
//! `get_timeline` resolves the user's follow list, spawns one task per
//! followed owner to list that owner's posts, waits for every task, then
//! sorts the merged posts newest first and keeps the first `PAGE_SIZE`.
//!
//! A failing owner costs its posts and a log line, never the whole timeline.
//! The failures are kept per owner in `TimelinePage::failures`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use social_feed::{seed, store::StoreClient, timeline::Timeline};
//!
//! let client = StoreClient::connect("http://127.0.0.1:50051").await?;
//! let timeline = Timeline::new(Arc::new(seed::directory()), client);
//!
//! for post in timeline.get_timeline("user1").await {
//!     println!("{} {} {}", post.created_at, post.owner_id, post.content);
//! }
//! ```

mod error;
mod fanout;
mod source;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::directory::UserDirectory;
use crate::post::{DeleteOutcome, Post, PostView};

pub use error::{FanoutFailure, TimelineError};
pub use source::PostSource;

/// Posts per timeline page.
pub const PAGE_SIZE: usize = 20;

/// A timeline page together with the owners that couldn't be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelinePage {
    pub posts: Vec<PostView>,
    pub failures: Vec<FanoutFailure>,
}

pub struct Timeline<S> {
    directory: Arc<dyn UserDirectory>,
    source: Arc<S>,
    fanout_timeout: Option<Duration>,
}

impl<S: PostSource> Timeline<S> {
    pub fn new(directory: Arc<dyn UserDirectory>, source: S) -> Self {
        Self {
            directory,
            source: Arc::new(source),
            fanout_timeout: None,
        }
    }

    /// Bound the whole fan-out by `timeout`. Owners still in flight when it
    /// expires are cancelled and reported as failures.
    pub fn with_fanout_timeout(mut self, timeout: Duration) -> Self {
        self.fanout_timeout = Some(timeout);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The most recent posts from everyone `user_id` follows.
    ///
    /// An unknown user gets an empty timeline, same as a user who follows
    /// nobody.
    pub async fn get_timeline(&self, user_id: &str) -> Vec<PostView> {
        self.get_timeline_page(user_id).await.posts
    }

    pub async fn get_timeline_page(&self, user_id: &str) -> TimelinePage {
        let Some(user) = self.directory.get_user(user_id) else {
            debug!(user_id = %user_id, "timeline requested for unknown user");
            return TimelinePage::default();
        };

        let (posts, failures) =
            fanout::gather(&self.source, user.follows, self.fanout_timeout).await;

        debug!(
            user_id = %user_id,
            posts = posts.len(),
            failed_owners = failures.len(),
            "timeline assembled"
        );

        TimelinePage {
            posts: posts.into_iter().map(PostView::from).collect(),
            failures,
        }
    }

    pub async fn create_post(
        &self,
        owner_id: &str,
        content: &str,
    ) -> Result<PostView, TimelineError> {
        let msg = self
            .source
            .create_post(owner_id, content)
            .await
            .map_err(|e| {
                warn!(owner_id = %owner_id, error = %e, "create post failed");
                TimelineError::from(e)
            })?;
        Ok(PostView::from(Post::try_from(msg)?))
    }

    pub async fn update_post(&self, post_id: &str, content: &str) -> Result<PostView, TimelineError> {
        let msg = self
            .source
            .update_post(post_id, content)
            .await
            .map_err(|e| {
                warn!(post_id = %post_id, error = %e, "update post failed");
                TimelineError::from(e)
            })?;
        Ok(PostView::from(Post::try_from(msg)?))
    }

    /// Delete never errors; transport failures are folded into the outcome.
    pub async fn delete_post(&self, post_id: &str) -> DeleteOutcome {
        match self.source.delete_post(post_id).await {
            Ok(resp) => DeleteOutcome {
                success: resp.success,
                message: resp.message,
            },
            Err(e) => {
                warn!(post_id = %post_id, error = %e, "delete post failed");
                DeleteOutcome {
                    success: false,
                    message: e.to_string(),
                }
            }
        }
    }
}
