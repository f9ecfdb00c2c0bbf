//! User directory: who exists and whom they follow.
//!
//! The directory is read-only from the feed's point of view. The repository
//! asks it whether an owner exists; the timeline asks it for a follow list.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A user and the ids of the users they follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub follows: Vec<String>,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            follows: Vec::new(),
        }
    }

    /// Builder-style follow list. Repeated ids are kept once, first-seen order.
    pub fn following<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        self.follows = ids
            .into_iter()
            .map(Into::into)
            .filter(|id: &String| seen.insert(id.clone()))
            .collect();
        self
    }
}

/// Read-only user lookup.
pub trait UserDirectory: Send + Sync {
    fn get_user(&self, id: &str) -> Option<User>;

    fn contains(&self, id: &str) -> bool {
        self.get_user(id).is_some()
    }
}

impl<D: UserDirectory + ?Sized> UserDirectory for Arc<D> {
    fn get_user(&self, id: &str) -> Option<User> {
        (**self).get_user(id)
    }

    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }
}

/// HashMap-backed directory, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    users: HashMap<String, User>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id.clone(), u)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for InMemoryDirectory {
    fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }
}
