//! Post repository: owner-scoped, id-addressed in-memory post storage.
//!
//! `PostRepository` is a plain single-writer structure. `SharedRepository`
//! puts it behind one `RwLock` so concurrent store calls can't break id
//! uniqueness or leave the two indices out of step. Clone-friendly via Arc.

mod posts;

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::post::Post;

pub use posts::PostRepository;

#[derive(Clone)]
pub struct SharedRepository {
    inner: Arc<RwLock<PostRepository>>,
}

impl SharedRepository {
    pub fn new(repo: PostRepository) -> Self {
        SharedRepository {
            inner: Arc::new(RwLock::new(repo)),
        }
    }

    pub fn read(&self, owner_id: &str) -> Result<Vec<Post>, StoreError> {
        let repo = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(repo.read(owner_id))
    }

    pub fn get(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let repo = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(repo.get(id))
    }

    pub fn create(&self, owner_id: &str, content: &str) -> Result<Post, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?
            .create(owner_id, content)
    }

    /// Create with an explicit stamp, for seeding and fixtures.
    ///
    /// The stamp is taken as given, so it may be older than posts already
    /// stored. Later `create` calls never go below it.
    pub fn create_at(
        &self,
        owner_id: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Post, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?
            .create_at(owner_id, content, created_at)
    }

    pub fn update(&self, id: &str, content: &str) -> Result<Post, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?
            .update(id, content)
    }

    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?
            .delete(id)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let repo = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(repo.len())
    }
}
