//! Decision engine: one prompt, one generation call, one parsed plan.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, info};

use webpilot_protocols::{ActionStep, DecideRequest, DecisionError, TextGenerator};

use crate::prompt::{PromptBuilder, DEFAULT_DOM_CHAR_BUDGET};
use crate::repair::parse_plan;

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Ceiling on DOM characters interpolated into the prompt.
    pub dom_char_budget: usize,

    /// Wall-clock bound on the generation call. On expiry the call future
    /// is dropped, which cancels the in-flight request.
    pub generation_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dom_char_budget: DEFAULT_DOM_CHAR_BUDGET,
            generation_timeout: Duration::from_secs(9),
        }
    }
}

/// Turns one decision request into one action plan.
///
/// Holds no per-request state; a single engine is shared across all
/// concurrent requests.
pub struct DecisionEngine {
    generator: Arc<dyn TextGenerator>,
    config: EngineConfig,
}

impl DecisionEngine {
    /// Create an engine with default tuning.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_config(generator, EngineConfig::default())
    }

    /// Create an engine with explicit tuning.
    pub fn with_config(generator: Arc<dyn TextGenerator>, config: EngineConfig) -> Self {
        Self { generator, config }
    }

    /// Model identifier of the underlying generator.
    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Run one decision turn.
    ///
    /// Validates the snapshot, renders the prompt, makes exactly one
    /// generation call bounded by the configured timeout, and parses the
    /// reply. The returned JSON is the model's plan structurally unchanged,
    /// except that an empty array is normalized to a single `log` step.
    pub async fn decide(&self, request: &DecideRequest) -> Result<Value, DecisionError> {
        if request.dom_snapshot.trim().is_empty() {
            return Err(DecisionError::EmptyDom);
        }

        info!("--- NEW TURN ---");
        info!("[Goal]: \"{}\"", request.user_intent);
        info!("[URL]: {}", request.current_url);
        debug!(
            "DOM snapshot: {} chars, preview: {}",
            request.dom_snapshot.chars().count(),
            dom_preview(&request.dom_snapshot)
        );

        let prompt = PromptBuilder::new(request)
            .with_dom_char_budget(self.config.dom_char_budget)
            .render();

        let started = Instant::now();
        let deadline = self.config.generation_timeout;
        let reply = match timeout(deadline, self.generator.generate(&prompt)).await {
            Ok(result) => result?,
            Err(_) => return Err(DecisionError::Timeout(deadline.as_secs())),
        };
        debug!(
            "generation finished in {:?}, reply {} bytes",
            started.elapsed(),
            reply.len()
        );

        let plan = normalize_plan(parse_plan(&reply)?);
        log_plan(&plan);

        Ok(plan)
    }
}

/// Replace an empty array plan with a single informational entry so callers
/// never receive a zero-length success body.
fn normalize_plan(plan: Value) -> Value {
    match plan {
        Value::Array(steps) if steps.is_empty() => serde_json::json!([ActionStep::log(
            "Model returned an empty plan for this turn; nothing to execute."
        )]),
        other => other,
    }
}

/// Log the leading step of the parsed plan.
fn log_plan(plan: &Value) {
    let first = match plan {
        Value::Array(steps) => steps.first(),
        other => Some(other),
    };

    if let Some(step) = first {
        if let Some(thought) = step.get("thought").and_then(Value::as_str) {
            info!("[AI Plan]: {}", thought);
        }
        let action = step.get("action").and_then(Value::as_str).unwrap_or("?");
        let selector = step.get("selector").and_then(Value::as_str).unwrap_or("-");
        info!("[Action]: {} -> {}", action, selector);
    }
}

fn dom_preview(dom: &str) -> String {
    const PREVIEW_CHARS: usize = 120;
    dom.chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
