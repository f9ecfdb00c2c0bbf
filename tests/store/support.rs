use std::sync::Arc;

use social_feed::store::{self, StoreClient};
use social_feed::{InMemoryDirectory, PostRepository, SharedRepository, User};
use tokio::net::TcpListener;

pub fn fresh_repo() -> SharedRepository {
    let directory = InMemoryDirectory::with_users([
        User::new("user1", "alice").following(["user2"]),
        User::new("user2", "bob"),
    ]);
    SharedRepository::new(PostRepository::new(Arc::new(directory)))
}

/// Bind to port 0, spawn the store, and return its endpoint.
pub async fn spawn_store(repo: SharedRepository) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        store::serve_with_listener(repo, listener).await.unwrap();
    });
    format!("http://{addr}")
}

/// Spawn a store over `repo` and return a connected client.
pub async fn start_store(repo: SharedRepository) -> StoreClient {
    let endpoint = spawn_store(repo).await;
    StoreClient::connect(endpoint).await.unwrap()
}
