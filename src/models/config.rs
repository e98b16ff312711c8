//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
///
/// Assembled once at startup (TOML file and/or environment) and handed to
/// the constructors of the generation and storage backends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Text generation backend settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Object storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Override values with whatever `lookup` returns for the recognized
    /// environment variables. Blank values and unparseable numbers are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(region) = get(env::REGION) {
            self.generation.region = region;
        }
        if let Some(model_id) = get(env::MODEL_ID) {
            self.generation.model_id = model_id;
        }
        if let Some(secs) = get(env::READ_TIMEOUT_SECS).and_then(|v| v.parse().ok()) {
            self.generation.read_timeout_secs = secs;
        }
        if let Some(attempts) = get(env::MAX_ATTEMPTS).and_then(|v| v.parse().ok()) {
            self.generation.max_attempts = attempts;
        }
        if let Some(bucket) = get(env::BUCKET) {
            self.storage.bucket = bucket;
        }
        if let Some(prefix) = get(env::KEY_PREFIX) {
            self.storage.key_prefix = prefix;
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.generation.region.trim().is_empty() {
            return Err(AppError::validation("generation.region is empty"));
        }
        if self.generation.model_id.trim().is_empty() {
            return Err(AppError::validation("generation.model_id is empty"));
        }
        if self.generation.read_timeout_secs == 0 {
            return Err(AppError::validation(
                "generation.read_timeout_secs must be > 0",
            ));
        }
        if self.generation.max_attempts == 0 {
            return Err(AppError::validation("generation.max_attempts must be > 0"));
        }
        if self.storage.bucket.trim().is_empty() {
            return Err(AppError::validation("storage.bucket is empty"));
        }
        if self.storage.key_prefix.trim_matches('/').is_empty() {
            return Err(AppError::validation("storage.key_prefix is empty"));
        }
        Ok(())
    }
}

/// Environment variable names.
pub mod env {
    pub const REGION: &str = "AWS_REGION";
    pub const MODEL_ID: &str = "BEDROCK_MODEL_ID";
    pub const READ_TIMEOUT_SECS: &str = "BEDROCK_READ_TIMEOUT_SECS";
    pub const MAX_ATTEMPTS: &str = "BEDROCK_MAX_ATTEMPTS";
    pub const BUCKET: &str = "BLOG_S3_BUCKET";
    pub const KEY_PREFIX: &str = "BLOG_KEY_PREFIX";
}

/// Bedrock client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// AWS region of the inference endpoint
    #[serde(default = "defaults::region")]
    pub region: String,

    /// Bedrock model identifier
    #[serde(default = "defaults::model_id")]
    pub model_id: String,

    /// Read timeout for a single inference call, in seconds
    #[serde(default = "defaults::read_timeout")]
    pub read_timeout_secs: u64,

    /// Total attempts the SDK makes on transient failures
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            region: defaults::region(),
            model_id: defaults::model_id(),
            read_timeout_secs: defaults::read_timeout(),
            max_attempts: defaults::max_attempts(),
        }
    }
}

/// Blog object storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Destination bucket
    #[serde(default = "defaults::bucket")]
    pub bucket: String,

    /// Key prefix under which posts are written
    #[serde(default = "defaults::key_prefix")]
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: defaults::bucket(),
            key_prefix: defaults::key_prefix(),
        }
    }
}

mod defaults {
    pub fn region() -> String {
        "us-east-1".into()
    }
    pub fn model_id() -> String {
        "us.meta.llama3-1-8b-instruct-v1:0".into()
    }
    pub fn read_timeout() -> u64 {
        200
    }
    pub fn max_attempts() -> u32 {
        3
    }
    pub fn bucket() -> String {
        "bedrock-demo-blogs".into()
    }
    pub fn key_prefix() -> String {
        "blogs".into()
    }
}
