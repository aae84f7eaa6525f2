//! # Webpilot API
//!
//! HTTP surface of the decision service: the decision endpoint plus
//! liveness and health probes, served by axum with permissive CORS and a
//! raised body-size ceiling for large DOM snapshots.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ErrorBody;
pub use http::routes::create_router;
pub use server::{ApiConfig, ApiServer};
pub use state::AppState;
