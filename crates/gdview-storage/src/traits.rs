//! Listing abstraction trait
//!
//! This module defines the `ObjectLister` trait that all listing backends
//! must implement.

use async_trait::async_trait;
use thiserror::Error;

use crate::StorageBackend;

/// Listing operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    #[error("Invalid bucket name: {0}")]
    InvalidBucket(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for listing operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for gdview_core::AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::BucketNotFound(bucket) => {
                gdview_core::AppError::NotFound(format!("Bucket not found: {}", bucket))
            }
            StorageError::InvalidBucket(msg) => gdview_core::AppError::InvalidInput(msg),
            StorageError::ConfigError(msg) => gdview_core::AppError::Config(msg),
            other => gdview_core::AppError::Storage(other.to_string()),
        }
    }
}

/// Bucket listing abstraction
///
/// All listing backends (S3, local filesystem) must implement this trait so
/// the search handler can work against any backend without coupling to
/// implementation details.
#[async_trait]
pub trait ObjectLister: Send + Sync {
    /// List every object key in `bucket`, optionally restricted to keys
    /// under `prefix`. Backend order is preserved; the result covers the
    /// complete listing, not a single page.
    async fn list_keys(&self, bucket: &str, prefix: Option<&str>) -> StorageResult<Vec<String>>;

    /// Public URL for an object, suitable for a browser link.
    fn public_url(&self, bucket: &str, key: &str) -> String;

    /// Get the listing backend type
    fn backend_type(&self) -> StorageBackend;
}

/// Percent-encode an object key for use in a URL path, keeping the `/`
/// separators between key segments intact.
pub(crate) fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_key_preserves_segment_separators() {
        assert_eq!(encode_key("a/b/c.txt"), "a/b/c.txt");
        assert_eq!(encode_key("ack/file name.xml"), "ack/file%20name.xml");
    }

    #[test]
    fn storage_errors_map_to_app_errors() {
        let err: gdview_core::AppError = StorageError::BucketNotFound("b".into()).into();
        assert!(matches!(err, gdview_core::AppError::NotFound(_)));
        let err: gdview_core::AppError = StorageError::ListFailed("x".into()).into();
        assert!(matches!(err, gdview_core::AppError::Storage(_)));
    }
}
