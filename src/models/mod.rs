// src/models/mod.rs

//! Domain models for the blog generator.
//!
//! Everything here is request-scoped except `Config`, which is assembled
//! once per process.

mod blog;
mod config;
mod event;

// Re-export all public types
pub use blog::{BlogSummary, ErrorBody, GenerationRequest, GenerationResponse};
pub use config::{Config, GenerationConfig, StorageConfig, env};
pub use event::{ApiResponse, InboundEvent};
