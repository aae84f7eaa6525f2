//! Prompt template for one decision turn.
//!
//! The template is the whole contract with the model: the output schema is
//! carried as natural-language instructions, not as a structured tool
//! definition, so the engine parses whatever text comes back.

use webpilot_protocols::DecideRequest;

/// Default ceiling on how many characters of the DOM snapshot are
/// interpolated into the prompt.
pub const DEFAULT_DOM_CHAR_BUDGET: usize = 25_000;

const DEFAULT_PREAMBLE: &str =
    "You are an autonomous browser agent. Your job is to achieve the user's GOAL.";

const RULES: &str = "\
1. ANALYZE: Look at the HTML. Does it match the GOAL?
2. HISTORY: Do not repeat the exact same action from PREVIOUS ACTIONS if it did not work.
3. POPUPS: If a popup or cookie banner obscures the view, close it first.
4. FINISH: If the goal is achieved, return a single \"completed\" step.
5. SELECTORS: Prefer resilient selectors (aria-label, placeholder, text content).";

const OUTPUT_CONTRACT: &str = "\
Return a single-line JSON array of step objects with these fields:
  \"action\": one of \"click\" | \"type\" | \"wait\" | \"open\" | \"assert\" | \"log\" | \"completed\"
  \"selector\": CSS selector for the target element (null when not applicable)
  \"xpath\": optional XPath alternative to the selector
  \"value\": text to type for \"type\", URL for \"open\", milliseconds for \"wait\"
  \"thought\": reasoning for the step
  \"description\": short description for human approval
Do not wrap the reply in markdown fences. Do not put literal newlines inside strings.";

/// Renders the generation prompt for a decision request.
pub struct PromptBuilder<'a> {
    request: &'a DecideRequest,
    dom_char_budget: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Create a builder over one request.
    pub fn new(request: &'a DecideRequest) -> Self {
        Self {
            request,
            dom_char_budget: DEFAULT_DOM_CHAR_BUDGET,
        }
    }

    /// Override the snapshot character ceiling.
    pub fn with_dom_char_budget(mut self, budget: usize) -> Self {
        self.dom_char_budget = budget;
        self
    }

    /// Render the full prompt string.
    ///
    /// A `systemPrompt` in the request replaces the persona preamble only;
    /// the rules and the output contract are appended regardless so the
    /// reply stays machine-readable.
    pub fn render(&self) -> String {
        let preamble = self
            .request
            .system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_PREAMBLE);

        let history = serde_json::to_string(&self.request.previous_actions)
            .unwrap_or_else(|_| "[]".to_string());

        let dom = truncate_to_chars(&self.request.dom_snapshot, self.dom_char_budget);

        format!(
            "{preamble}\n\n\
             === CONTEXT ===\n\
             GOAL: \"{goal}\"\n\
             CURRENT URL: \"{url}\"\n\
             PREVIOUS ACTIONS: {history}\n\n\
             === HTML SNAPSHOT ===\n\
             {dom}\n\n\
             === RULES ===\n\
             {rules}\n\n\
             === OUTPUT FORMAT (JSON ONLY) ===\n\
             {contract}\n",
            preamble = preamble,
            goal = self.request.user_intent,
            url = self.request.current_url,
            history = history,
            dom = dom,
            rules = RULES,
            contract = OUTPUT_CONTRACT,
        )
    }
}

/// Cut `text` after `budget` characters, respecting char boundaries.
fn truncate_to_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
