//! HTTP route definitions.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::http::handlers::decide;
use crate::http::monitoring;
use crate::state::AppState;

/// Create the service router.
///
/// ## Route Structure
///
/// ```text
/// GET  /                  - Plain-text liveness message
/// GET  /health            - Service health (version, uptime, model)
/// POST /api/agent/decide  - Decide the next browser action(s)
/// ```
///
/// CORS is wide open: the caller is a local automation client or browser
/// extension and the service holds no credentials of its own. The body
/// limit is raised well past axum's default to accommodate serialized DOM
/// snapshots.
pub fn create_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(monitoring::liveness))
        .route("/health", get(monitoring::health))
        .route("/api/agent/decide", post(decide))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
