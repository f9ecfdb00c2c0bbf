//! HTTP gateway integration tests.
//!
//! Runs the axum gateway in front of a live store and drives it with reqwest.

#[cfg(feature = "http")]
mod http;
