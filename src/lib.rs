// src/lib.rs

//! Blog Generator Library
//!
//! Turns a topic into a short blog post with Amazon Bedrock and stores the
//! post in S3.

pub mod error;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
