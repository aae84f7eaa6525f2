//! Decision endpoint wire format.

use serde::{Deserialize, Serialize};

use crate::action::ActionStep;

/// Body of `POST /api/agent/decide`.
///
/// Field names follow the JSON wire format used by the browser-side client
/// (`userIntent`, `domSnapshot`, ...). Everything is optional on the wire;
/// the engine rejects requests whose DOM snapshot is missing or blank before
/// any generation call is made.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideRequest {
    /// The goal the agent should pursue.
    #[serde(default)]
    pub user_intent: String,

    /// Serialized markup of the current page.
    #[serde(default)]
    pub dom_snapshot: String,

    /// URL the snapshot was taken from.
    #[serde(default)]
    pub current_url: String,

    /// Steps already executed in earlier turns, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_actions: Vec<ActionStep>,

    /// Optional replacement for the instruction preamble. The output
    /// contract is appended regardless so replies stay machine-readable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl DecideRequest {
    /// Build a request from the three mandatory pieces of context.
    pub fn new(
        user_intent: impl Into<String>,
        dom_snapshot: impl Into<String>,
        current_url: impl Into<String>,
    ) -> Self {
        Self {
            user_intent: user_intent.into(),
            dom_snapshot: dom_snapshot.into(),
            current_url: current_url.into(),
            previous_actions: Vec::new(),
            system_prompt: None,
        }
    }
}

#[cfg(test)]
#[path = "decide_tests.rs"]
mod tests;
