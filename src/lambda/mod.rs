// src/lambda/mod.rs

//! AWS Lambda handler for the blog generator.
//!
//! Receives an API Gateway proxy event and always answers with a proxy
//! response envelope; request-level failures never reach the runtime as
//! errors.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::{info, instrument};

use crate::models::{ApiResponse, InboundEvent};
use crate::pipeline::BlogPipeline;

/// Main Lambda handler function.
#[instrument(skip(pipeline, event), fields(request_id = %event.context.request_id))]
pub async fn handler(
    pipeline: &BlogPipeline,
    event: LambdaEvent<Value>,
) -> std::result::Result<ApiResponse, LambdaError> {
    let (payload, _context) = event.into_parts();
    let event = InboundEvent::from_value(payload);

    let response = pipeline.handle(&event).await;

    info!(status = response.status_code, "Request handled");
    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use lambda_runtime::Context;
    use tempfile::TempDir;

    use super::*;
    use crate::error::Result;
    use crate::services::TextGenerator;
    use crate::storage::LocalStorage;

    struct Canned;

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _topic: &str) -> Result<String> {
            Ok("Canned post.".to_string())
        }
    }

    fn pipeline(tmp: &TempDir) -> BlogPipeline {
        BlogPipeline::new(
            Arc::new(Canned),
            Arc::new(LocalStorage::new(tmp.path())),
            "blogs",
        )
    }

    #[tokio::test]
    async fn test_gateway_event() {
        let tmp = TempDir::new().unwrap();
        let payload = serde_json::json!({
            "httpMethod": "POST",
            "path": "/blog",
            "body": "{\"blogstopic\": \"Tea\"}",
            "isBase64Encoded": false
        });

        let response = handler(&pipeline(&tmp), LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        let body = response.json_body().unwrap();
        let key = body["s3_key"].as_str().unwrap();
        assert!(key.starts_with("blogs/Tea_"));
        assert_eq!(
            std::fs::read_to_string(tmp.path().join(key)).unwrap(),
            "Canned post."
        );
    }

    #[tokio::test]
    async fn test_direct_invocation_without_body() {
        let tmp = TempDir::new().unwrap();
        let payload = serde_json::json!({ "blogstopic": "Tea" });

        let response = handler(&pipeline(&tmp), LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap();

        assert_eq!(response.status_code, 400);
    }
}
