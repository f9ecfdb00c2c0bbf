//! Demo data: five users who follow each other and ten posts.
//!
//! Used by the `post-store` binary and by tests. Nothing in the library
//! reaches for it implicitly.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::directory::{InMemoryDirectory, User, UserDirectory};
use crate::error::StoreError;
use crate::repository::{PostRepository, SharedRepository};

pub fn users() -> Vec<User> {
    vec![
        User::new("user1", "alice").following(["user2", "user3", "user4"]),
        User::new("user2", "bob").following(["user1", "user5"]),
        User::new("user3", "charlie").following(["user1", "user2"]),
        User::new("user4", "dave").following(["user1", "user5"]),
        User::new("user5", "eve").following(["user1", "user3"]),
    ]
}

pub fn directory() -> InMemoryDirectory {
    InMemoryDirectory::with_users(users())
}

/// `(owner, content, age)` for each demo post, in id order.
const POSTS: &[(&str, &str, i64)] = &[
    ("user1", "Hello, world!", 60 * 60),
    ("user1", "GraphQL is awesome", 2 * 60 * 60),
    ("user2", "gRPC is cool", 30 * 60),
    (
        "user2",
        "Check out this server architecture diagram: https://example.com/architecture-diagram.png",
        3 * 60 * 60,
    ),
    ("user3", "Working on a new project", 4 * 60 * 60),
    (
        "user3",
        "Learning Go microservices with this system design diagram: https://example.com/microservices.jpg",
        10 * 60,
    ),
    ("user4", "Just deployed my first service!", 60),
    ("user4", "Anyone else using Protocol Buffers?", 5 * 60 * 60),
    ("user5", "Server architecture examples: https://example.com/server-arch.png", 0),
    ("user5", "Microservices vs monoliths", 2 * 60),
];

/// A repository holding the demo posts (`post1`..`post10`), aged relative
/// to now.
pub fn repository(directory: Arc<dyn UserDirectory>) -> Result<SharedRepository, StoreError> {
    let mut repo = PostRepository::new(directory);
    let now = Utc::now();
    for (owner, content, age_secs) in POSTS {
        repo.create_at(owner, content, now - Duration::seconds(*age_secs))?;
    }
    Ok(SharedRepository::new(repo))
}
