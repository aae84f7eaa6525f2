//! HTTP interface module.
//!
//! REST endpoints for:
//! - Action-plan decisions
//! - Liveness and health checks

pub mod handlers;
pub mod routes;

// Internal modules (not publicly exported)
pub(crate) mod monitoring;
