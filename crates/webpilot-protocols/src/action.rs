//! Canonical action-plan schema.
//!
//! The decision endpoint instructs the model to reply with a JSON array of
//! step objects in exactly this shape. The same shape is accepted back in
//! `previousActions` on the next turn.

use serde::{Deserialize, Serialize};

/// Kind of browser interaction a step describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Click the element addressed by the selector.
    Click,
    /// Type `value` into the element addressed by the selector.
    Type,
    /// Pause; `value` optionally carries a duration hint in milliseconds.
    Wait,
    /// Navigate to the URL carried in `value`.
    Open,
    /// Check that the element addressed by the selector is present.
    Assert,
    /// Informational entry; nothing is executed.
    Log,
    /// The goal is achieved, stop driving the page.
    Completed,
}

/// One step of an action plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionStep {
    /// What to do.
    pub action: ActionKind,

    /// CSS selector addressing the target element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// XPath alternative for targets a CSS selector cannot reach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    /// Payload: text to type, URL to open, or a wait hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Model rationale for the step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<String>,

    /// Short human-readable summary, shown for approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ActionStep {
    /// Create a bare step of the given kind.
    pub fn new(action: ActionKind) -> Self {
        Self {
            action,
            selector: None,
            xpath: None,
            value: None,
            thought: None,
            description: None,
        }
    }

    /// Create a click step for a selector.
    pub fn click(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            ..Self::new(ActionKind::Click)
        }
    }

    /// Create a type step writing `value` into `selector`.
    pub fn type_text(selector: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            value: Some(value.into()),
            ..Self::new(ActionKind::Type)
        }
    }

    /// Create an informational log step.
    pub fn log(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::new(ActionKind::Log)
        }
    }

    /// Create a completed step.
    pub fn completed(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::new(ActionKind::Completed)
        }
    }

    /// Attach a rationale.
    pub fn with_thought(mut self, thought: impl Into<String>) -> Self {
        self.thought = Some(thought.into());
        self
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
