//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use webpilot_protocols::DecisionError;

/// JSON error body returned by the decision endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    pub error: String,

    /// The original model reply, carried when the failure is an unparsable
    /// generation so callers can inspect what came back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ErrorBody {
    /// A bare error message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw: None,
        }
    }

    /// An error message together with the offending raw text.
    pub fn with_raw(error: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw: Some(raw.into()),
        }
    }
}

/// Map a decision failure to its HTTP response.
///
/// An unparsable model reply is a data-level failure: the exchange with the
/// provider succeeded, so it ships with 200 and the raw text. Validation
/// failures are 400, transport failures and timeouts 500.
pub fn decision_error_response(err: DecisionError) -> Response {
    let message = err.to_string();
    match err {
        DecisionError::EmptyDom => {
            (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
        }
        DecisionError::PlanUnparsable { raw } => {
            (StatusCode::OK, Json(ErrorBody::with_raw(message, raw))).into_response()
        }
        DecisionError::Provider(_) | DecisionError::Timeout(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(message)),
        )
            .into_response(),
    }
}
