//! # Webpilot Protocols
//!
//! Shared types for the webpilot decision service:
//!
//! - [`ActionStep`] / [`ActionKind`] - the canonical action-plan schema
//! - [`DecideRequest`] - the decision endpoint's wire format
//! - [`TextGenerator`] - the seam between the engine and hosted generation
//!   services
//! - [`ProviderError`] / [`DecisionError`] - error enums shared across crates

pub mod action;
pub mod decide;
pub mod error;
pub mod provider;

pub use action::{ActionKind, ActionStep};
pub use decide::DecideRequest;
pub use error::{DecisionError, ProviderError};
pub use provider::TextGenerator;
