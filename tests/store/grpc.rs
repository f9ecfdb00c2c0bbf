//! Store RPCs end to end.

use std::collections::HashSet;

use chrono::Utc;
use social_feed::post::Post;
use social_feed::store::DELETE_OK_MESSAGE;

use crate::support::{fresh_repo, start_store};

#[tokio::test]
async fn create_then_list() {
    let client = start_store(fresh_repo()).await;
    let started = Utc::now().timestamp();

    let created = client.create_post("user1", "gRPC is cool").await.unwrap();
    let listed = client.list_posts_by_owner("user1").await.unwrap().posts;

    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(created.owner_id, "user1");
    assert_eq!(created.content, "gRPC is cool");
    assert!(created.created_at >= started);
}

#[tokio::test]
async fn list_unknown_owner_is_empty() {
    let client = start_store(fresh_repo()).await;

    let resp = client.list_posts_by_owner("nobody").await.unwrap();

    assert!(resp.posts.is_empty());
}

#[tokio::test]
async fn create_for_unknown_owner_is_not_found() {
    let client = start_store(fresh_repo()).await;

    let err = client.create_post("ghost", "boo").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("user with ID ghost not found"));
}

#[tokio::test]
async fn update_changes_only_content() {
    let client = start_store(fresh_repo()).await;
    let before = client.create_post("user2", "draft").await.unwrap();

    let after = client.update_post(&before.id, "final").await.unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.owner_id, before.owner_id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.content, "final");
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let client = start_store(fresh_repo()).await;

    let err = client.update_post("post404", "x").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_then_everything_is_not_found() {
    let client = start_store(fresh_repo()).await;
    let doomed = client.create_post("user1", "temporary").await.unwrap();
    let kept = client.create_post("user1", "permanent").await.unwrap();

    let resp = client.delete_post(&doomed.id).await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.message, DELETE_OK_MESSAGE);

    let listed = client.list_posts_by_owner("user1").await.unwrap().posts;
    assert_eq!(listed, vec![kept.clone()]);
    assert!(client.update_post(&doomed.id, "again").await.unwrap_err().is_not_found());

    let again = client.delete_post(&doomed.id).await.unwrap();
    assert!(!again.success);
    assert_eq!(again.message, format!("post with ID {} not found", doomed.id));

    let next = client.create_post("user1", "new").await.unwrap();
    assert_ne!(next.id, doomed.id);
    assert_ne!(next.id, kept.id);
}

#[tokio::test]
async fn wire_post_converts_back_at_second_resolution() {
    let client = start_store(fresh_repo()).await;
    let msg = client.create_post("user2", "round trip").await.unwrap();

    let post = Post::try_from(msg.clone()).unwrap();

    assert_eq!(post.created_at.timestamp(), msg.created_at);
    assert_eq!(post.created_at_unix(), msg.created_at);
}

#[tokio::test]
async fn concurrent_creates_over_the_wire_get_unique_ids() {
    let client = start_store(fresh_repo()).await;

    let mut tasks = tokio::task::JoinSet::new();
    for n in 0..32 {
        let client = client.clone();
        tasks.spawn(async move {
            client
                .create_post("user1", &format!("post number {n}"))
                .await
                .unwrap()
                .id
        });
    }

    let mut ids = HashSet::new();
    while let Some(id) = tasks.join_next().await {
        ids.insert(id.unwrap());
    }

    assert_eq!(ids.len(), 32);
    let listed = client.list_posts_by_owner("user1").await.unwrap().posts;
    assert_eq!(listed.len(), 32);
}
