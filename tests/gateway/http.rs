use std::sync::Arc;

use serde_json::{json, Value};
use social_feed::store::{self, StoreClient};
use social_feed::{gateway, seed, DeleteOutcome, PostView, Timeline, UserDirectory};
use tokio::net::TcpListener;

/// Store and gateway on free ports; returns the gateway base URL.
async fn start_gateway() -> String {
    let directory: Arc<dyn UserDirectory> = Arc::new(seed::directory());
    let repo = seed::repository(directory.clone()).unwrap();

    let store_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let store_addr = store_listener.local_addr().unwrap();
    tokio::spawn(async move {
        store::serve_with_listener(repo, store_listener).await.unwrap();
    });
    let client = StoreClient::connect(format!("http://{store_addr}"))
        .await
        .unwrap();

    let app = gateway::router(Arc::new(Timeline::new(directory, client)));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_check() {
    let base = start_gateway().await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn timeline_route() {
    let base = start_gateway().await;

    let resp = reqwest::get(format!("{base}/timeline/user1")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let posts: Vec<PostView> = resp.json().await.unwrap();
    let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["post7", "post6", "post3", "post4", "post5", "post8"]);
}

#[tokio::test]
async fn unknown_user_timeline_is_empty_array() {
    let base = start_gateway().await;

    let resp = reqwest::get(format!("{base}/timeline/nobody")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_update_delete() {
    let base = start_gateway().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/posts"))
        .json(&json!({ "ownerId": "user1", "content": "This is a new post!" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let created: PostView = resp.json().await.unwrap();
    assert_eq!(created.owner_id, "user1");

    let resp = client
        .put(format!("{base}/posts/{}", created.id))
        .json(&json!({ "content": "edited" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: PostView = resp.json().await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "edited");
    assert_eq!(updated.created_at, created.created_at);

    let resp = client
        .delete(format!("{base}/posts/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let outcome: DeleteOutcome = resp.json().await.unwrap();
    assert!(outcome.success);
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let base = start_gateway().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/posts"))
        .json(&json!({ "ownerId": "ghost", "content": "boo" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "user with ID ghost not found");

    let resp = client
        .put(format!("{base}/posts/post404"))
        .json(&json!({ "content": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_missing_post_is_200_with_failure() {
    let base = start_gateway().await;

    let resp = reqwest::Client::new()
        .delete(format!("{base}/posts/post404"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let outcome: DeleteOutcome = resp.json().await.unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.message, "post with ID post404 not found");
}
