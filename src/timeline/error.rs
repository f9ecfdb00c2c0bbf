use thiserror::Error;
use tonic::{Code, Status};

use crate::rpc::WireError;
use crate::store::ClientError;

/// Failures on the timeline's write paths.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The owner (create) or post (update) doesn't exist.
    #[error("{0}")]
    NotFound(String),
    /// The store can't be reached.
    #[error("{0}")]
    Unavailable(String),
    /// Any other error status from the store.
    #[error("post store error: {}", .0.message())]
    Remote(Status),
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl From<ClientError> for TimelineError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unavailable { .. } => TimelineError::Unavailable(err.to_string()),
            ClientError::Remote(status) => match status.code() {
                Code::NotFound => TimelineError::NotFound(status.message().to_string()),
                Code::Unavailable => TimelineError::Unavailable(status.message().to_string()),
                _ => TimelineError::Remote(status),
            },
        }
    }
}

/// One followed owner whose posts didn't make it into the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanoutFailure {
    pub owner_id: String,
    pub reason: String,
}
