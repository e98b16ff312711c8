//! AWS S3 storage implementation.
//!
//! Posts are written with a single `PutObject`; nothing is read back.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::{AppError, Result};
use crate::models::StorageConfig;
use crate::storage::{BlogStorage, StoredObject, TEXT_CONTENT_TYPE};

/// S3-based post storage.
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    /// Create a new S3 storage instance.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Create S3 storage with the default AWS credential and region chain.
    pub async fn from_config(config: &StorageConfig) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config), &config.bucket)
    }
}

#[async_trait]
impl BlogStorage for S3Storage {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put_text(&self, key: &str, content: &str) -> Result<StoredObject> {
        let bytes = content.as_bytes().to_vec();
        let size = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(TEXT_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| AppError::storage(DisplayErrorContext(&e)))?;

        log::info!("Wrote {} bytes to s3://{}/{}", size, self.bucket, key);

        Ok(StoredObject {
            bucket: self.bucket.clone(),
            key: key.to_string(),
            size,
            content_type: TEXT_CONTENT_TYPE,
        })
    }
}
