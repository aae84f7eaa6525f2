//! Gemini text generator.

use async_trait::async_trait;
use tracing::debug;

use webpilot_protocols::{ProviderError, TextGenerator};

use crate::client::GeminiClient;
use crate::types::{Content, GenerateContentRequest, GenerationConfig};

/// Text generator backed by the Gemini generateContent API.
///
/// Every call asks for a JSON-mode reply at the configured temperature,
/// so the model is steered toward machine-readable plans rather than
/// prose.
pub struct GeminiGenerator {
    client: GeminiClient,
    model: String,
    temperature: f32,
}

impl GeminiGenerator {
    /// Create a generator against the public API.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model,
            temperature: 0.0,
        }
    }

    /// Create a generator against a custom endpoint (tests, proxies).
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: GeminiClient::with_base_url(api_key, base_url),
            model,
            temperature: 0.0,
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                temperature: Some(self.temperature),
                response_mime_type: Some("application/json".to_string()),
            }),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn id(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        debug!("Gemini generate: model={}", self.model);

        let request = self.build_request(prompt);
        let response = self.client.generate_content(&self.model, request).await?;

        if let Some(reason) = response.block_reason() {
            return Err(ProviderError::ContentFiltered(reason.to_string()));
        }

        let text = response.text();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse(
                "no candidates returned".to_string(),
            ));
        }

        if let Some(usage) = &response.usage_metadata {
            debug!(
                "Gemini usage: prompt={} completion={} total={}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        Ok(text)
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
