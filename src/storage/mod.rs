//! Storage abstractions for generated posts.
//!
//! Posts are write-once plain-text objects:
//!
//! ```text
//! {bucket}/
//! └── blogs/
//!     ├── Coffee_2026-10-18T09-30-00Z.txt
//!     └── Rust-tips_2026-10-18T09-31-12Z.txt
//! ```
//!
//! Keys embed a second-resolution timestamp. Two posts for the same
//! sanitized topic written within the same second share a key, and the
//! later write replaces the earlier one.

pub mod local;
pub mod s3;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;
pub use s3::S3Storage;

/// Content type of stored posts.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Record of a completed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Bucket (or local root) the object was written to
    pub bucket: String,
    /// Object key
    pub key: String,
    /// Number of bytes written
    pub size: usize,
    /// Content type recorded with the object
    pub content_type: &'static str,
}

/// Trait for post storage backends.
#[async_trait]
pub trait BlogStorage: Send + Sync {
    /// Bucket name (or root directory) posts are written to.
    fn bucket(&self) -> &str;

    /// Write `content` as UTF-8 text under `key`, replacing any existing object.
    async fn put_text(&self, key: &str, content: &str) -> Result<StoredObject>;
}

/// Storage key derivation.
pub mod paths {
    use chrono::{DateTime, Utc};

    /// Key stem used when nothing of the topic survives sanitizing.
    pub const FALLBACK_STEM: &str = "blog";

    /// Timestamp layout embedded in keys.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%SZ";

    /// Keep alphanumerics, `-` and `_`; drop everything else.
    pub fn sanitize_topic(topic: &str) -> String {
        let stem: String = topic
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .collect();

        if stem.is_empty() {
            FALLBACK_STEM.to_string()
        } else {
            stem
        }
    }

    /// `{prefix}/{sanitized-topic}_{timestamp}.txt`
    pub fn blog_key(prefix: &str, topic: &str, at: DateTime<Utc>) -> String {
        format!(
            "{}/{}_{}.txt",
            prefix.trim_matches('/'),
            sanitize_topic(topic),
            at.format(TIMESTAMP_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::paths::*;

    #[test]
    fn test_sanitize_drops_punctuation_and_spaces() {
        assert_eq!(sanitize_topic("Coffee!!"), "Coffee");
        assert_eq!(sanitize_topic("Rust tips & tricks"), "Rusttipstricks");
        assert_eq!(sanitize_topic("foo-bar_baz"), "foo-bar_baz");
        assert_eq!(sanitize_topic("../../etc/passwd"), "etcpasswd");
    }

    #[test]
    fn test_sanitize_keeps_unicode_letters() {
        assert_eq!(sanitize_topic("커피 이야기"), "커피이야기");
        assert_eq!(sanitize_topic("Café"), "Café");
    }

    #[test]
    fn test_sanitize_fallback() {
        assert_eq!(sanitize_topic("!!! ???"), "blog");
        assert_eq!(sanitize_topic("  "), "blog");
    }

    #[test]
    fn test_blog_key_format() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            blog_key("blogs", "Coffee!!", at),
            "blogs/Coffee_2026-01-02T03-04-05Z.txt"
        );
        assert_eq!(
            blog_key("/blogs/", "?", at),
            "blogs/blog_2026-01-02T03-04-05Z.txt"
        );
    }
}
