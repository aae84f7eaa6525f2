//! Webpilot - Decision backend for DOM-driven browser agents.
//!
//! Main entry point for the webpilot decision service.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use webpilot_api::{ApiConfig, ApiServer, AppState};
use webpilot_config::{Config, ConfigError, ConfigLoader};
use webpilot_engine::{DecisionEngine, EngineConfig};
use webpilot_provider_gemini::GeminiGenerator;

/// Webpilot CLI.
#[derive(Parser)]
#[command(name = "webpilot")]
#[command(about = "Decision backend for DOM-driven browser agents")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,

    /// Server host (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides the config file)
    #[arg(long)]
    port: Option<u16>,
}

/// Initialize tracing with console output.
///
/// `RUST_LOG` controls the filter; the default level is `info`.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        info!("Loading configuration from {}", path.display());
        ConfigLoader::load(path)
    } else {
        warn!(
            "Configuration file {} not found, using built-in defaults",
            path.display()
        );
        Ok(Config::default())
    }
}

/// Resolve the Gemini API key from config or environment.
fn resolve_api_key(config: &Config) -> Result<String, ConfigError> {
    if let Some(key) = &config.gemini.api_key {
        if !key.is_empty() {
            return Ok(key.clone());
        }
    }
    std::env::var("GEMINI_API_KEY")
        .map_err(|_| ConfigError::MissingField("gemini.api_key".to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    run_server(config).await
}

/// Run the decision service in foreground.
async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Webpilot v{}", env!("CARGO_PKG_VERSION"));

    let api_key = match resolve_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            error!(
                "No Gemini API key configured. Set GEMINI_API_KEY or gemini.api_key in the config file."
            );
            return Err(Box::new(e));
        }
    };

    let generator = match &config.gemini.base_url {
        Some(base_url) => {
            GeminiGenerator::with_base_url(api_key, config.gemini.model.clone(), base_url.clone())
        }
        None => GeminiGenerator::new(api_key, config.gemini.model.clone()),
    };
    let generator = Arc::new(generator.with_temperature(config.gemini.temperature));
    info!("Gemini provider ready: model={}", config.gemini.model);

    let engine = DecisionEngine::with_config(
        generator,
        EngineConfig {
            dom_char_budget: config.engine.dom_char_budget,
            generation_timeout: Duration::from_secs(config.engine.generation_timeout_secs),
        },
    );

    let state = Arc::new(AppState::new(engine));

    let server = ApiServer::new(
        ApiConfig {
            host: config.server.host.clone(),
            port: config.server.port,
            max_body_bytes: config.server.max_body_bytes(),
        },
        state,
    );

    info!("Webpilot ready:");
    info!("  Decision API:  http://{}", server.addr());
    info!("");
    info!("API Endpoints:");
    info!("  POST /api/agent/decide - one action plan per turn");
    info!("  GET  /health           - service health");
    info!("  GET  /                 - liveness probe");

    server.run().await?;

    info!("Shutting down...");
    Ok(())
}
