//! Liveness and health check handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Version information.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Model identifier this process generates with.
    pub model: String,
    /// Decision requests handled since startup.
    pub requests_served: u64,
}

/// Plain-text liveness message.
///
/// GET /
pub async fn liveness() -> &'static str {
    "webpilot decision service is running"
}

/// Health check.
///
/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
        model: state.model().to_string(),
        requests_served: state.request_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness_message() {
        let message = liveness().await;
        assert!(message.contains("running"));
    }

    #[test]
    fn test_health_response_serialize() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_seconds: 42,
            model: "gemini-1.5-flash".to_string(),
            requests_served: 7,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("gemini-1.5-flash"));
        assert!(json.contains("\"uptime_seconds\":42"));
    }
}
