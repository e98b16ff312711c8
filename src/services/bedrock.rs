//! Amazon Bedrock Runtime text generator.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;

use crate::error::{AppError, Result};
use crate::models::GenerationConfig;
use crate::services::generation::{TextGenerator, build_request, parse_response};

/// Generator backed by `InvokeModel` on Bedrock Runtime.
///
/// Holds only configuration and a pooled SDK client, so one instance can
/// serve every invocation of the process.
#[derive(Clone)]
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
}

impl BedrockGenerator {
    /// Create a generator around an existing client.
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Build the client from configuration.
    ///
    /// The read timeout bounds a single long-running inference call; the SDK
    /// retries transient failures up to `max_attempts` times in total.
    pub async fn from_config(config: &GenerationConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts))
            .timeout_config(
                TimeoutConfig::builder()
                    .read_timeout(Duration::from_secs(config.read_timeout_secs))
                    .build(),
            )
            .load()
            .await;

        Self::new(Client::new(&sdk_config), &config.model_id)
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn generate(&self, topic: &str) -> Result<String> {
        let payload = serde_json::to_vec(&build_request(topic))?;

        log::debug!("Invoking model {}", self.model_id);

        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| AppError::generation(DisplayErrorContext(&e)))?;

        let text = parse_response(output.body().as_ref())?;
        log::info!("Model {} returned {} chars", self.model_id, text.chars().count());
        Ok(text)
    }
}
