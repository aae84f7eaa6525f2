//! # Webpilot Engine
//!
//! The decision logic behind the endpoint: render one prompt from the
//! incoming turn, make one timeout-bounded generation call, recover the
//! reply into JSON, and normalize degenerate plans.

pub mod engine;
pub mod prompt;
pub mod repair;

pub use engine::{DecisionEngine, EngineConfig};
pub use prompt::PromptBuilder;
pub use repair::parse_plan;
