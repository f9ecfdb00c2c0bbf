use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::warn;

use super::error::FanoutFailure;
use super::source::PostSource;
use super::PAGE_SIZE;
use crate::post::Post;

/// A fetched post tagged with where it came from, for a stable tie-break.
struct Entry {
    slot: usize,
    position: usize,
    post: Post,
}

/// `Ok(slot)` once an owner's posts are in the buffer.
type TaskResult = Result<usize, (usize, FanoutFailure)>;

/// List every owner's posts concurrently, then merge newest first.
///
/// Equal timestamps keep follow-list order, then the owner's own order.
pub(super) async fn gather<S: PostSource>(
    source: &Arc<S>,
    owners: Vec<String>,
    timeout: Option<Duration>,
) -> (Vec<Post>, Vec<FanoutFailure>) {
    // `follows` is a public field, so repeats can still get here.
    let mut seen = HashSet::new();
    let owners: Vec<String> = owners.into_iter().filter(|o| seen.insert(o.clone())).collect();

    let buffer: Arc<Mutex<Vec<Entry>>> = Arc::new(Mutex::new(Vec::new()));
    let deadline = timeout.map(|t| Instant::now() + t);
    let mut tasks: JoinSet<TaskResult> = JoinSet::new();

    for (slot, owner_id) in owners.iter().cloned().enumerate() {
        let source = Arc::clone(source);
        let buffer = Arc::clone(&buffer);
        tasks.spawn(async move { fetch_owner(source, buffer, slot, owner_id, deadline).await });
    }

    let mut finished = HashSet::new();
    let mut failures = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(slot)) => {
                finished.insert(slot);
            }
            Ok(Err((slot, failure))) => {
                finished.insert(slot);
                failures.push((slot, failure));
            }
            Err(e) => warn!(error = %e, "fan-out task did not complete"),
        }
    }

    // Tasks that panicked or were aborted never reported their slot.
    for (slot, owner_id) in owners.into_iter().enumerate() {
        if !finished.contains(&slot) {
            failures.push((
                slot,
                FanoutFailure {
                    owner_id,
                    reason: "fan-out task did not complete".to_string(),
                },
            ));
        }
    }
    failures.sort_by_key(|(slot, _)| *slot);

    let mut merged = std::mem::take(&mut *buffer.lock().unwrap_or_else(PoisonError::into_inner));
    merged.sort_by(|a, b| {
        b.post
            .created_at
            .cmp(&a.post.created_at)
            .then(a.slot.cmp(&b.slot))
            .then(a.position.cmp(&b.position))
    });
    merged.truncate(PAGE_SIZE);

    (
        merged.into_iter().map(|e| e.post).collect(),
        failures.into_iter().map(|(_, f)| f).collect(),
    )
}

async fn fetch_owner<S: PostSource>(
    source: Arc<S>,
    buffer: Arc<Mutex<Vec<Entry>>>,
    slot: usize,
    owner_id: String,
    deadline: Option<Instant>,
) -> TaskResult {
    let fail = |reason: String| -> TaskResult {
        warn!(owner_id = %owner_id, reason = %reason, "error fetching posts for owner");
        Err((
            slot,
            FanoutFailure {
                owner_id: owner_id.clone(),
                reason,
            },
        ))
    };

    let listed = match deadline {
        Some(at) => match tokio::time::timeout_at(at, source.list_posts_by_owner(&owner_id)).await {
            Ok(listed) => listed,
            Err(_) => return fail("deadline exceeded".to_string()),
        },
        None => source.list_posts_by_owner(&owner_id).await,
    };
    let messages = match listed {
        Ok(messages) => messages,
        Err(e) => return fail(e.to_string()),
    };

    let mut entries = Vec::with_capacity(messages.len());
    for (position, msg) in messages.into_iter().enumerate() {
        match Post::try_from(msg) {
            Ok(post) => entries.push(Entry {
                slot,
                position,
                post,
            }),
            Err(e) => return fail(e.to_string()),
        }
    }

    // Held for the append only, never across the remote call.
    buffer
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .extend(entries);
    Ok(slot)
}
