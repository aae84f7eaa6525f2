//! Decision endpoint handler.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use webpilot_protocols::DecideRequest;

use crate::error::decision_error_response;
use crate::state::AppState;

/// Decide the next browser action(s) for one turn.
///
/// POST /api/agent/decide
///
/// The success body is the model's parsed plan, structurally unchanged.
/// There is no schema validation beyond JSON syntax: the output contract
/// lives in the prompt, and the executing client is the judge of whether a
/// step makes sense.
pub async fn decide(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DecideRequest>,
) -> Response {
    state.increment_requests();

    match state.engine.decide(&request).await {
        Ok(plan) => Json(plan).into_response(),
        Err(err) => {
            error!("decision failed: {}", err);
            decision_error_response(err)
        }
    }
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
