//! Decision engine errors.

use thiserror::Error;

use super::ProviderError;

#[derive(Debug, Error)]
pub enum DecisionError {
    /// The request arrived without a usable DOM snapshot. Rejected before
    /// any generation call is made.
    #[error("domSnapshot is required")]
    EmptyDom,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("generation took too long: no reply within {0}s")]
    Timeout(u64),

    /// The model reply stayed unparsable after repair. `raw` carries the
    /// original reply text untouched.
    #[error("Invalid JSON from AI")]
    PlanUnparsable { raw: String },
}

#[cfg(test)]
#[path = "decision_tests.rs"]
mod tests;
