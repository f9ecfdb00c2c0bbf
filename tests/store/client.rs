//! Client connection lifecycle.

use social_feed::store::{ClientError, StoreClient};
use tokio::net::TcpListener;

use crate::support::{fresh_repo, spawn_store};

#[tokio::test]
async fn dialing_a_closed_port_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = StoreClient::connect(format!("http://{addr}"))
        .await
        .err()
        .unwrap();

    match err {
        ClientError::Unavailable { endpoint, .. } => {
            assert_eq!(endpoint, format!("http://{addr}"));
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_endpoint_is_unavailable() {
    let err = StoreClient::connect("not a uri").await.err().unwrap();
    assert!(matches!(err, ClientError::Unavailable { .. }));
}

#[tokio::test]
async fn close_leaves_other_handles_working() {
    let endpoint = spawn_store(fresh_repo()).await;
    let first = StoreClient::connect(endpoint.clone()).await.unwrap();
    let second = first.clone();

    assert_eq!(first.endpoint(), endpoint);
    first.close();

    let created = second.create_post("user1", "still here").await.unwrap();
    assert_eq!(created.owner_id, "user1");
    second.close();
}
