// src/services/generation.rs

//! Text generation contract.
//!
//! The prompt template and sampling parameters are fixed; callers only
//! choose the topic.

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{GenerationRequest, GenerationResponse};

/// Maximum number of tokens the model may generate.
pub const MAX_GEN_LEN: u32 = 512;

/// Sampling temperature.
pub const TEMPERATURE: f32 = 0.5;

/// Nucleus sampling probability.
pub const TOP_P: f32 = 0.9;

/// Backend able to turn a topic into blog text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate blog text for `topic`.
    ///
    /// Returns the trimmed text, which may be empty when the backend answered
    /// without content. Transport and envelope failures are `AppError::Generation`.
    async fn generate(&self, topic: &str) -> Result<String>;
}

/// Instruction prompt for the given topic.
///
/// The topic is embedded verbatim.
pub fn build_prompt(topic: &str) -> String {
    format!("<s>[INST]Human: Write a ~250-word blog on the topic: {topic}. Assistant:[/INST]")
}

/// Full inference request for the given topic.
pub fn build_request(topic: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: build_prompt(topic),
        max_gen_len: MAX_GEN_LEN,
        temperature: TEMPERATURE,
        top_p: TOP_P,
    }
}

/// Extract the generated text from a raw response envelope.
pub fn parse_response(bytes: &[u8]) -> Result<String> {
    let response: GenerationResponse = serde_json::from_slice(bytes)
        .map_err(|e| AppError::generation(format!("invalid response body: {e}")))?;
    Ok(response.into_text())
}
