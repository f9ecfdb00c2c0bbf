use thiserror::Error;

/// Failures raised by the post repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("user with ID {0} not found")]
    OwnerNotFound(String),
    #[error("post with ID {0} not found")]
    PostNotFound(String),
    #[error("repository lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::OwnerNotFound(_) | StoreError::PostNotFound(_)
        )
    }
}
