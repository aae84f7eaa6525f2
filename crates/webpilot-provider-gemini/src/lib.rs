//! # Webpilot Provider - Gemini
//!
//! Google Gemini `generateContent` client and the [`TextGenerator`]
//! implementation the decision engine calls.
//!
//! [`TextGenerator`]: webpilot_protocols::TextGenerator

mod client;
mod generator;
mod types;

pub use client::GeminiClient;
pub use generator::GeminiGenerator;
pub use types::*;
