use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::traits::{encode_key, ObjectLister, StorageError, StorageResult};
use crate::StorageBackend;

/// Local filesystem listing implementation
///
/// Each bucket is a subdirectory under the base path; object keys are the
/// `/`-separated paths of the files inside it. Used by tests and local
/// development.
#[derive(Clone)]
pub struct LocalLister {
    base_path: PathBuf,
}

impl LocalLister {
    /// Create a new LocalLister instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory holding one subdirectory per bucket
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalLister { base_path })
    }

    /// Resolve a bucket name to its directory, rejecting names that could
    /// escape the base directory.
    fn bucket_dir(&self, bucket: &str) -> StorageResult<PathBuf> {
        if bucket.is_empty() || bucket.contains("..") || bucket.contains('/') {
            return Err(StorageError::InvalidBucket(format!(
                "Bucket name contains invalid characters: {}",
                bucket
            )));
        }
        Ok(self.base_path.join(bucket))
    }

    /// Key of `path` relative to `root`, with `/` separators.
    fn relative_key(root: &Path, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(root).ok()?;
        let segments: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(segments.join("/"))
    }
}

#[async_trait]
impl ObjectLister for LocalLister {
    async fn list_keys(&self, bucket: &str, prefix: Option<&str>) -> StorageResult<Vec<String>> {
        let root = self.bucket_dir(bucket)?;
        if !root.is_dir() {
            return Err(StorageError::BucketNotFound(bucket.to_string()));
        }

        // Iterative walk; sorted for a deterministic listing order.
        let mut keys = Vec::new();
        let mut pending = vec![root.clone()];
        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if let Some(key) = Self::relative_key(&root, &path) {
                    if prefix.map_or(true, |p| key.starts_with(p)) {
                        keys.push(key);
                    }
                }
            }
        }
        keys.sort();

        tracing::debug!(
            bucket = %bucket,
            prefix = prefix.unwrap_or(""),
            key_count = keys.len(),
            "Local listing successful"
        );

        Ok(keys)
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "file://{}/{}/{}",
            self.base_path.display(),
            bucket,
            encode_key(key)
        )
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
