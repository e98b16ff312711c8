//! AWS Lambda entry point for the blog generator
//!
//! Deploy with `cargo lambda build --release --features lambda`.
//!
//! ## Environment Variables
//!
//! - `AWS_REGION`: Bedrock region (default: `us-east-1`)
//! - `BEDROCK_MODEL_ID`: model to invoke (default: `us.meta.llama3-1-8b-instruct-v1:0`)
//! - `BEDROCK_READ_TIMEOUT_SECS`: read timeout per inference call (default: `200`)
//! - `BEDROCK_MAX_ATTEMPTS`: SDK attempts on transient failures (default: `3`)
//! - `BLOG_S3_BUCKET`: destination bucket (default: `bedrock-demo-blogs`)
//! - `BLOG_KEY_PREFIX`: key prefix (default: `blogs`)
//! - `RUST_LOG`: Log level (e.g., `info`, `debug`)

use blog_generator::lambda::handler;
use blog_generator::models::Config;
use blog_generator::pipeline::BlogPipeline;
use lambda_runtime::{Error as LambdaError, service_fn};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = Config::from_env();
    config.validate()?;

    info!(
        region = %config.generation.region,
        model_id = %config.generation.model_id,
        bucket = %config.storage.bucket,
        "Blog generator Lambda starting..."
    );

    // Clients are built once and shared by every invocation.
    let pipeline = BlogPipeline::from_config(&config).await;
    let pipeline = &pipeline;

    lambda_runtime::run(service_fn(move |event| handler(pipeline, event))).await
}
