use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};

use crate::directory::UserDirectory;
use crate::error::StoreError;
use crate::post::Post;

/// Arena of posts with an owner index and an id index.
///
/// Slots are never reused: a deleted post leaves a tombstone, and the id
/// counter only moves forward, so an id is unique for the lifetime of the
/// repository.
pub struct PostRepository {
    directory: Arc<dyn UserDirectory>,
    slots: Vec<Option<Post>>,
    by_owner: HashMap<String, Vec<usize>>,
    by_id: HashMap<String, usize>,
    next_id: u64,
    last_stamp: Option<DateTime<Utc>>,
}

impl PostRepository {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        PostRepository {
            directory,
            slots: Vec::new(),
            by_owner: HashMap::new(),
            by_id: HashMap::new(),
            next_id: 1,
            last_stamp: None,
        }
    }

    /// Create a post stamped with the current time.
    ///
    /// The stamp never goes backwards relative to the previous one, even if
    /// the wall clock does.
    pub fn create(&mut self, owner_id: &str, content: &str) -> Result<Post, StoreError> {
        let now = Utc::now().trunc_subsecs(0);
        let stamp = match self.last_stamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.create_at(owner_id, content, stamp)
    }

    /// Create a post with an explicit creation time (truncated to seconds).
    ///
    /// Meant for seeding and fixtures: the stamp is not clamped, so it can sit
    /// before posts already stored. It still raises the floor for `create`.
    pub fn create_at(
        &mut self,
        owner_id: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Post, StoreError> {
        if !self.directory.contains(owner_id) {
            return Err(StoreError::OwnerNotFound(owner_id.to_string()));
        }

        let created_at = created_at.trunc_subsecs(0);
        let post = Post {
            id: format!("post{}", self.next_id),
            owner_id: owner_id.to_string(),
            content: content.to_string(),
            created_at,
        };
        self.next_id += 1;
        self.last_stamp = Some(self.last_stamp.map_or(created_at, |l| l.max(created_at)));

        let slot = self.slots.len();
        self.slots.push(Some(post.clone()));
        self.by_owner
            .entry(post.owner_id.clone())
            .or_default()
            .push(slot);
        self.by_id.insert(post.id.clone(), slot);

        Ok(post)
    }

    /// An owner's posts in insertion order. Unknown owners have none.
    pub fn read(&self, owner_id: &str) -> Vec<Post> {
        self.by_owner
            .get(owner_id)
            .map(|slots| {
                slots
                    .iter()
                    .filter_map(|&slot| self.slots[slot].clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<Post> {
        self.by_id
            .get(id)
            .and_then(|&slot| self.slots[slot].clone())
    }

    /// Replace a post's content. Id, owner and timestamp are left alone.
    pub fn update(&mut self, id: &str, content: &str) -> Result<Post, StoreError> {
        let post = self
            .by_id
            .get(id)
            .and_then(|&slot| self.slots[slot].as_mut())
            .ok_or_else(|| StoreError::PostNotFound(id.to_string()))?;

        post.content = content.to_string();
        Ok(post.clone())
    }

    /// Remove a post from both indices.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let slot = self
            .by_id
            .remove(id)
            .ok_or_else(|| StoreError::PostNotFound(id.to_string()))?;

        if let Some(post) = self.slots[slot].take() {
            if let Some(owned) = self.by_owner.get_mut(&post.owner_id) {
                owned.retain(|&s| s != slot);
                if owned.is_empty() {
                    self.by_owner.remove(&post.owner_id);
                }
            }
        }

        Ok(true)
    }

    /// Number of live posts.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
