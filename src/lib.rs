pub mod config;
pub mod directory;
mod error;
pub mod post;
pub mod repository;
pub mod rpc;
pub mod seed;
pub mod store;
pub mod telemetry;
pub mod timeline;

// HTTP gateway (requires "http" feature)
#[cfg(feature = "http")]
pub mod gateway;

pub use config::Config;
pub use directory::{InMemoryDirectory, User, UserDirectory};
pub use error::StoreError;
pub use post::{DeleteOutcome, Post, PostView};
pub use repository::{PostRepository, SharedRepository};
pub use store::{ClientError, PostStoreService, StoreClient};
pub use timeline::{FanoutFailure, PostSource, Timeline, TimelineError, TimelinePage, PAGE_SIZE};
