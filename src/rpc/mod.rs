//! Wire contract for the post store.
//!
//! Message types are prost structs (standard protobuf wire format, no `.proto`
//! file). The `PostStore` service trait, server and client are generated by
//! `build.rs` with tonic's manual builder.
//!
//! ## RPCs
//!
//! - `ListPostsByOwner`: an owner's posts, empty for unknown owners.
//! - `CreatePost`: `NOT_FOUND` if the owner doesn't exist.
//! - `UpdatePost`: `NOT_FOUND` if the post doesn't exist.
//! - `DeletePost`: never fails; outcome is in `success` / `message`.
//!
//! Timestamps travel as Unix seconds.

use chrono::DateTime;
use thiserror::Error;

use crate::post::Post;

// ---------------------------------------------------------------------------
// Message types
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, prost::Message)]
pub struct PostMessage {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub owner_id: String,
    #[prost(string, tag = "3")]
    pub content: String,
    #[prost(int64, tag = "4")]
    pub created_at: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListPostsRequest {
    #[prost(string, tag = "1")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListPostsResponse {
    #[prost(message, repeated, tag = "1")]
    pub posts: Vec<PostMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreatePostRequest {
    #[prost(string, tag = "1")]
    pub owner_id: String,
    #[prost(string, tag = "2")]
    pub content: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdatePostRequest {
    #[prost(string, tag = "1")]
    pub post_id: String,
    #[prost(string, tag = "2")]
    pub content: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeletePostRequest {
    #[prost(string, tag = "1")]
    pub post_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeletePostResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Generated service trait + server/client
// ---------------------------------------------------------------------------

include!(concat!(env!("OUT_DIR"), "/feed.store.PostStore.rs"));

pub use post_store_client::PostStoreClient;
pub use post_store_server::{PostStore, PostStoreServer};

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("post {id} has an out-of-range timestamp {seconds}")]
    Timestamp { id: String, seconds: i64 },
}

impl From<&Post> for PostMessage {
    fn from(post: &Post) -> Self {
        PostMessage {
            id: post.id.clone(),
            owner_id: post.owner_id.clone(),
            content: post.content.clone(),
            created_at: post.created_at_unix(),
        }
    }
}

impl From<Post> for PostMessage {
    fn from(post: Post) -> Self {
        PostMessage::from(&post)
    }
}

impl TryFrom<PostMessage> for Post {
    type Error = WireError;

    fn try_from(msg: PostMessage) -> Result<Self, Self::Error> {
        let created_at =
            DateTime::from_timestamp(msg.created_at, 0).ok_or_else(|| WireError::Timestamp {
                id: msg.id.clone(),
                seconds: msg.created_at,
            })?;

        Ok(Post {
            id: msg.id,
            owner_id: msg.owner_id,
            content: msg.content,
            created_at,
        })
    }
}
