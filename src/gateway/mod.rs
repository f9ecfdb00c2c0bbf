//! Outward JSON gateway over the timeline (requires the `http` feature).
//!
//! ## Routes
//!
//! - `GET /health`: `{ "ok": true }`.
//! - `GET /timeline/:user_id`: the user's timeline page.
//! - `POST /posts`: body `{ "ownerId", "content" }`.
//! - `PUT /posts/:id`: body `{ "content" }`.
//! - `DELETE /posts/:id`: always 200 with `{ "success", "message" }`.
//!
//! ## Example
//!
//! ```ignore
//! let timeline = Arc::new(Timeline::new(directory, client));
//! gateway::serve(timeline, "127.0.0.1:8080").await?;
//! ```

mod http;

pub use http::{router, serve, CreatePostBody, UpdatePostBody};
