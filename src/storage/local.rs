//! Local filesystem storage implementation.
//!
//! Mirrors the S3 key layout under a root directory, for offline runs and
//! tests. Production deployments should use `S3Storage`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::storage::{BlogStorage, StoredObject, TEXT_CONTENT_TYPE};

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    label: String,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        let root_dir = root_dir.into();
        let label = root_dir.display().to_string();
        Self { root_dir, label }
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl BlogStorage for LocalStorage {
    fn bucket(&self) -> &str {
        &self.label
    }

    async fn put_text(&self, key: &str, content: &str) -> Result<StoredObject> {
        let bytes = content.as_bytes();
        self.write_bytes(key, bytes)
            .await
            .map_err(|e| AppError::storage(format!("{}: {}", self.path(key).display(), e)))?;

        log::info!("Wrote {} bytes to {}", bytes.len(), self.path(key).display());

        Ok(StoredObject {
            bucket: self.label.clone(),
            key: key.to_string(),
            size: bytes.len(),
            content_type: TEXT_CONTENT_TYPE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_put_text_creates_dirs() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let stored = storage
            .put_text("blogs/Coffee_2026-01-01T00-00-00Z.txt", "☕ coffee")
            .await
            .unwrap();

        let written = std::fs::read_to_string(tmp.path().join(&stored.key)).unwrap();
        assert_eq!(written, "☕ coffee");
        assert_eq!(stored.size, "☕ coffee".len());
        assert_eq!(stored.content_type, "text/plain; charset=utf-8");
        assert!(!tmp.path().join("blogs/Coffee_2026-01-01T00-00-00Z.tmp").exists());
    }

    #[tokio::test]
    async fn test_put_text_overwrites() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.put_text("blogs/a.txt", "first").await.unwrap();
        storage.put_text("blogs/a.txt", "second").await.unwrap();

        let written = std::fs::read_to_string(tmp.path().join("blogs/a.txt")).unwrap();
        assert_eq!(written, "second");
    }

    #[tokio::test]
    async fn test_put_text_failure_is_storage_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("blogs"), "not a directory").unwrap();
        let storage = LocalStorage::new(tmp.path());

        let err = storage.put_text("blogs/a.txt", "x").await.unwrap_err();
        assert_eq!(err.status_code(), 502);
        assert!(err.to_string().starts_with("Failed to save to S3: "));
    }
}
