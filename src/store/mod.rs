//! Post store: the gRPC service over the repository, and its client.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use social_feed::{seed, store};
//!
//! let repo = seed::repository(Arc::new(seed::directory()))?;
//!
//! // Server side
//! store::serve(repo, "127.0.0.1:50051".parse()?).await?;
//!
//! // Client side
//! let client = store::StoreClient::connect("http://127.0.0.1:50051").await?;
//! let posts = client.list_posts_by_owner("user1").await?.posts;
//! client.close();
//! ```

mod client;
mod service;

pub use client::{ClientError, StoreClient};
pub use service::{
    post_store_server, serve, serve_with_listener, PostStoreService, DELETE_OK_MESSAGE,
};
