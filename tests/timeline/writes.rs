//! Write pass-throughs: create, update, delete via the timeline.

use social_feed::TimelineError;

use crate::support::seeded_timeline;

#[tokio::test]
async fn create_returns_display_ready_post() {
    let (timeline, repo) = seeded_timeline().await;

    let view = timeline
        .create_post("user3", "Our infrastructure map https://cdn.example.com/map.webp?v=2")
        .await
        .unwrap();

    assert_eq!(view.id, "post11");
    assert_eq!(view.owner_id, "user3");
    assert_eq!(view.image_urls, vec!["https://cdn.example.com/map.webp?v=2"]);
    assert!(view.infrastructure_related);
    assert!(view.created_at.ends_with('Z'));
    assert!(repo.get("post11").unwrap().is_some());
}

#[tokio::test]
async fn create_for_unknown_owner_is_not_found() {
    let (timeline, _repo) = seeded_timeline().await;

    let err = timeline.create_post("nobody", "hi").await.unwrap_err();

    match err {
        TimelineError::NotFound(msg) => assert_eq!(msg, "user with ID nobody not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn update_keeps_identity_and_timestamp() {
    let (timeline, repo) = seeded_timeline().await;
    let before = repo.get("post1").unwrap().unwrap();

    let view = timeline
        .update_post("post1", "Updated content for this post")
        .await
        .unwrap();

    assert_eq!(view.id, before.id);
    assert_eq!(view.owner_id, before.owner_id);
    assert_eq!(view.created_at, social_feed::post::format_timestamp(&before.created_at));
    assert_eq!(view.content, "Updated content for this post");
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let (timeline, _repo) = seeded_timeline().await;

    let err = timeline.update_post("post999", "x").await.unwrap_err();

    assert!(matches!(err, TimelineError::NotFound(_)));
}

#[tokio::test]
async fn delete_reports_outcome_both_ways() {
    let (timeline, _repo) = seeded_timeline().await;

    let first = timeline.delete_post("post2").await;
    assert!(first.success);
    assert_eq!(first.message, "Post deleted successfully");

    let second = timeline.delete_post("post2").await;
    assert!(!second.success);
    assert_eq!(second.message, "post with ID post2 not found");
}
