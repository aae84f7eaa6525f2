//! Best-effort recovery of JSON from model replies.
//!
//! Replies usually parse directly once markdown fences are stripped. When
//! they do not, the one failure mode worth repairing is a literal control
//! character (newline, tab) inside a quoted string value; everything else
//! is surfaced to the caller together with the raw text.

use serde_json::Value;

use webpilot_protocols::DecisionError;

/// Parse a model reply into JSON, repairing it once if needed.
///
/// On failure the returned error carries `reply` unmodified, byte-for-byte,
/// so callers can log or forward exactly what the model said.
pub fn parse_plan(reply: &str) -> Result<Value, DecisionError> {
    let cleaned = strip_code_fences(reply);

    if let Ok(value) = serde_json::from_str(&cleaned) {
        return Ok(value);
    }

    let repaired = escape_control_chars_in_strings(&cleaned);
    serde_json::from_str(&repaired).map_err(|_| DecisionError::PlanUnparsable {
        raw: reply.to_string(),
    })
}

/// Remove markdown code fences and surrounding whitespace.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Escape literal control characters occurring inside quoted strings.
///
/// Tracks in-string and escape state character by character, so newlines
/// between tokens (pretty-printed JSON) are left alone and already-escaped
/// sequences are not double-escaped.
fn escape_control_chars_in_strings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if escaped {
            out.push(c);
            escaped = false;
            continue;
        }

        match c {
            '\\' if in_string => {
                out.push(c);
                escaped = true;
            }
            '"' => {
                in_string = !in_string;
                out.push(c);
            }
            '\n' if in_string => out.push_str("\\n"),
            '\r' if in_string => out.push_str("\\r"),
            '\t' if in_string => out.push_str("\\t"),
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
#[path = "repair_tests.rs"]
mod tests;
