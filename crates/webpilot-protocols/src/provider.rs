//! Text-generation provider seam.

use async_trait::async_trait;

use crate::error::ProviderError;

/// One text-in/text-out exchange with a hosted generation service.
///
/// The engine renders the full prompt and expects raw model text back;
/// sampling parameters and output mode are fixed at provider construction
/// time, never per call.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider id, e.g. "gemini".
    fn id(&self) -> &str;

    /// Model identifier used for generation calls.
    fn model(&self) -> &str;

    /// Perform a single generation call and return the reply text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
