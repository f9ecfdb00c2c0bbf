use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::timeline::{PostSource, Timeline, TimelineError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostBody {
    pub owner_id: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostBody {
    pub content: String,
}

/// Build an axum `Router` over the given timeline.
pub fn router<S: PostSource>(timeline: Arc<Timeline<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/timeline/:user_id", get(timeline_handler::<S>))
        .route("/posts", post(create_handler::<S>))
        .route(
            "/posts/:id",
            put(update_handler::<S>).delete(delete_handler::<S>),
        )
        .with_state(timeline)
}

/// Serve the gateway over HTTP at the given address (e.g. `"127.0.0.1:8080"`).
pub async fn serve<S: PostSource>(
    timeline: Arc<Timeline<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(timeline);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "feed gateway listening");
    axum::serve(listener, app).await
}

struct ApiError(TimelineError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TimelineError::NotFound(_) => StatusCode::NOT_FOUND,
            TimelineError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            TimelineError::Remote(_) | TimelineError::Wire(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn timeline_handler<S: PostSource>(
    State(timeline): State<Arc<Timeline<S>>>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    Json(timeline.get_timeline(&user_id).await)
}

async fn create_handler<S: PostSource>(
    State(timeline): State<Arc<Timeline<S>>>,
    Json(body): Json<CreatePostBody>,
) -> Response {
    match timeline.create_post(&body.owner_id, &body.content).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

async fn update_handler<S: PostSource>(
    State(timeline): State<Arc<Timeline<S>>>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePostBody>,
) -> Response {
    match timeline.update_post(&id, &body.content).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

async fn delete_handler<S: PostSource>(
    State(timeline): State<Arc<Timeline<S>>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    Json(timeline.delete_post(&id).await)
}
