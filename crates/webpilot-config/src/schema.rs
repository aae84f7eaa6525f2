//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request body ceiling in megabytes. DOM snapshots are large.
    #[serde(default = "default_max_body_mb")]
    pub max_body_mb: usize,
}

impl ServerConfig {
    /// Body ceiling in bytes, as the server layer consumes it.
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb * 1024 * 1024
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_mb: default_max_body_mb(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_mb() -> usize {
    50
}

/// Gemini provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; typically `"${GEMINI_API_KEY}"` expanded by the loader.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    /// Override of the API base URL, for tests and proxies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Sampling temperature. Zero keeps plans deterministic-leaning.
    #[serde(default)]
    pub temperature: f32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: None,
            temperature: 0.0,
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

/// Decision engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// DOM snapshots are cut to this many characters before prompting.
    #[serde(default = "default_dom_char_budget")]
    pub dom_char_budget: usize,

    /// Wall-clock bound on the generation call.
    #[serde(default = "default_generation_timeout")]
    pub generation_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dom_char_budget: default_dom_char_budget(),
            generation_timeout_secs: default_generation_timeout(),
        }
    }
}

fn default_dom_char_budget() -> usize {
    25_000
}

fn default_generation_timeout() -> u64 {
    9
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
