//! Blog generation data structures.

use serde::{Deserialize, Serialize};

/// Request body sent to a Llama-family model on Bedrock.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_gen_len: u32,
    pub temperature: f32,
    pub top_p: f32,
}

/// Response body returned by a Llama-family model on Bedrock.
///
/// Token counts and stop reason are present in the envelope but unused.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub generation: Option<String>,
}

impl GenerationResponse {
    /// Generated text, trimmed. Missing text yields an empty string.
    pub fn into_text(self) -> String {
        self.generation
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }
}

/// Success payload returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogSummary {
    pub message: String,
    pub s3_bucket: String,
    pub s3_key: String,
    pub length_chars: usize,
    pub preview: String,
}

/// Error payload returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
