// src/pipeline/blog.rs

//! Blog generation pipeline.
//!
//! Decode → extract topic → generate → check non-empty → store → respond.
//! Every stage failure ends the run with an error envelope; nothing is
//! retried or rolled back at this layer.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{ApiResponse, BlogSummary, Config, InboundEvent};
use crate::pipeline::{decode, response, topic};
use crate::services::{BedrockGenerator, TextGenerator};
use crate::storage::{BlogStorage, S3Storage, paths};

/// Source of the timestamp embedded in storage keys.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Process-wide pipeline.
///
/// Holds the backend handles and key settings only; every invocation's data
/// stays local to `handle`, so one instance serves all requests.
#[derive(Clone)]
pub struct BlogPipeline {
    generator: Arc<dyn TextGenerator>,
    storage: Arc<dyn BlogStorage>,
    key_prefix: String,
    clock: Clock,
}

impl BlogPipeline {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        storage: Arc<dyn BlogStorage>,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            storage,
            key_prefix: key_prefix.into(),
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the wall clock used for key timestamps.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// Pipeline backed by Bedrock and S3.
    pub async fn from_config(config: &Config) -> Self {
        let generator = BedrockGenerator::from_config(&config.generation).await;
        let storage = S3Storage::from_config(&config.storage).await;
        Self::new(
            Arc::new(generator),
            Arc::new(storage),
            &config.storage.key_prefix,
        )
    }

    /// Pipeline backed by Bedrock and the given storage.
    pub async fn with_storage(config: &Config, storage: Arc<dyn BlogStorage>) -> Self {
        let generator = BedrockGenerator::from_config(&config.generation).await;
        Self::new(Arc::new(generator), storage, &config.storage.key_prefix)
    }

    /// Handle a gateway event. Never fails: errors become error envelopes.
    pub async fn handle(&self, event: &InboundEvent) -> ApiResponse {
        match self.run(event).await {
            Ok(summary) => response::ok(&summary),
            Err(e) => {
                match e.status_code() {
                    400 => log::warn!("Rejected request: {}", e),
                    _ => log::error!("Request failed: {}", e),
                }
                response::error(&e)
            }
        }
    }

    /// Run the pipeline for a gateway event.
    pub async fn run(&self, event: &InboundEvent) -> Result<BlogSummary> {
        let payload = decode::decode_body(event);
        let topic = topic::extract_topic(&payload)?;
        self.generate_and_store(&topic).await
    }

    /// Generate a post for an already validated topic and store it.
    pub async fn generate_and_store(&self, topic: &str) -> Result<BlogSummary> {
        log::info!("Generating blog for topic ({} chars)", topic.chars().count());

        let text = self.generator.generate(topic).await?;
        if text.is_empty() {
            return Err(AppError::EmptyGeneration);
        }

        let key = paths::blog_key(&self.key_prefix, topic, (self.clock)());
        let stored = self.storage.put_text(&key, &text).await?;

        log::info!(
            "Stored {} chars at {}/{}",
            text.chars().count(),
            stored.bucket,
            stored.key
        );

        Ok(response::summarize(&stored.bucket, &stored.key, &text))
    }
}
