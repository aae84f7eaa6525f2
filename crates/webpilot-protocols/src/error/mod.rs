//! Error types shared across the webpilot crates.

mod decision;
mod provider;

pub use decision::*;
pub use provider::*;
