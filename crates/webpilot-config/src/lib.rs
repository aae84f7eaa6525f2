//! # Webpilot Config
//!
//! TOML configuration for the decision service: schema with serde defaults,
//! a loader with `${VAR}` environment expansion, and the config error type.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{Config, EngineConfig, GeminiConfig, ServerConfig};
