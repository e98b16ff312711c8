// src/error.rs

//! Unified error handling for the blog generator.
//!
//! Every variant knows the HTTP status it maps to, so the response builder
//! can turn any failure into a well-formed envelope.

use std::fmt;

use thiserror::Error;

/// Result type alias for blog generator operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Message shown for failures that have no dedicated category.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body was missing or unusable
    #[error("{0}")]
    InvalidRequest(String),

    /// Text generation call failed or returned an unreadable envelope
    #[error("Error generating blog: {0}")]
    Generation(String),

    /// Model answered, but with nothing usable
    #[error("Model returned empty content.")]
    EmptyGeneration,

    /// Object storage write failed
    #[error("Failed to save to S3: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AppError {
    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a generation error from any displayable cause.
    pub fn generation(cause: impl fmt::Display) -> Self {
        Self::Generation(cause.to_string())
    }

    /// Create a storage error from any displayable cause.
    pub fn storage(cause: impl fmt::Display) -> Self {
        Self::Storage(cause.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code reported to the caller for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::Generation(_) | Self::EmptyGeneration | Self::Storage(_) => 502,
            _ => 500,
        }
    }

    /// Message placed in the `error` field of the response body.
    ///
    /// Uncategorized failures are reported with a generic message; their
    /// details only go to the logs.
    pub fn public_message(&self) -> String {
        match self.status_code() {
            500 => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::invalid_request("x").status_code(), 400);
        assert_eq!(AppError::generation("x").status_code(), 502);
        assert_eq!(AppError::EmptyGeneration.status_code(), 502);
        assert_eq!(AppError::storage("x").status_code(), 502);
        assert_eq!(AppError::config("x").status_code(), 500);
    }

    #[test]
    fn test_messages_embed_cause() {
        assert_eq!(
            AppError::generation("throttled").public_message(),
            "Error generating blog: throttled"
        );
        assert_eq!(
            AppError::storage("AccessDenied").public_message(),
            "Failed to save to S3: AccessDenied"
        );
        assert_eq!(
            AppError::EmptyGeneration.public_message(),
            "Model returned empty content."
        );
    }

    #[test]
    fn test_internal_errors_are_generic() {
        let err = AppError::config("bucket secret-name missing");
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
    }
}
