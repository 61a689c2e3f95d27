use async_trait::async_trait;
use futures::StreamExt;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::ObjectStore;

use crate::traits::{encode_key, ObjectLister, StorageError, StorageResult};
use crate::StorageBackend;

/// S3 listing implementation
///
/// Credentials come from the ambient environment (`AWS_ACCESS_KEY_ID`,
/// `AWS_SECRET_ACCESS_KEY`, instance profiles, ...) via
/// `AmazonS3Builder::from_env`.
#[derive(Clone)]
pub struct S3Lister {
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Lister {
    /// Create a new S3Lister instance
    ///
    /// # Arguments
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub fn new(region: String, endpoint_url: Option<String>) -> Self {
        S3Lister {
            region,
            endpoint_url,
        }
    }

    /// Build an object store bound to `bucket`. The dashboard targets a
    /// different bucket per search, so stores are built per call.
    fn store_for(&self, bucket: &str) -> StorageResult<AmazonS3> {
        if bucket.is_empty() {
            return Err(StorageError::InvalidBucket(
                "Bucket name must not be empty".to_string(),
            ));
        }

        let mut builder = AmazonS3Builder::from_env()
            .with_region(self.region.clone())
            .with_bucket_name(bucket.to_string());

        if let Some(ref endpoint) = self.endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))
    }
}

#[async_trait]
impl ObjectLister for S3Lister {
    async fn list_keys(&self, bucket: &str, prefix: Option<&str>) -> StorageResult<Vec<String>> {
        let store = self.store_for(bucket)?;
        let prefix_path = prefix.map(Path::from);

        let start = std::time::Instant::now();

        // The listing stream pages through continuation tokens internally,
        // so this collects the complete key set rather than one page.
        let mut stream = store.list(prefix_path.as_ref());
        let mut keys = Vec::new();

        while let Some(entry) = stream.next().await {
            let meta = entry.map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    prefix = prefix.unwrap_or(""),
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 listing failed"
                );
                StorageError::ListFailed(e.to_string())
            })?;
            keys.push(meta.location.to_string());
        }

        tracing::info!(
            bucket = %bucket,
            prefix = prefix.unwrap_or(""),
            key_count = keys.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 listing successful"
        );

        Ok(keys)
    }

    /// For AWS S3, uses the virtual-hosted format: https://{bucket}.s3.amazonaws.com/{key}
    /// For S3-compatible providers, uses path-style under the endpoint URL
    fn public_url(&self, bucket: &str, key: &str) -> String {
        if let Some(ref endpoint) = self.endpoint_url {
            let base_url = endpoint.trim_end_matches('/');
            format!("{}/{}/{}", base_url, bucket, encode_key(key))
        } else {
            format!("https://{}.s3.amazonaws.com/{}", bucket, encode_key(key))
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_uses_virtual_hosted_style_for_aws() {
        let lister = S3Lister::new("us-east-1".to_string(), None);
        assert_eq!(
            lister.public_url("my-bucket", "ack/file-1.xml"),
            "https://my-bucket.s3.amazonaws.com/ack/file-1.xml"
        );
    }

    #[test]
    fn public_url_uses_path_style_for_custom_endpoints() {
        let lister = S3Lister::new(
            "us-east-1".to_string(),
            Some("http://localhost:9000/".to_string()),
        );
        assert_eq!(
            lister.public_url("my-bucket", "file.xml"),
            "http://localhost:9000/my-bucket/file.xml"
        );
    }

    #[test]
    fn empty_bucket_is_rejected_before_any_request() {
        let lister = S3Lister::new("us-east-1".to_string(), None);
        assert!(matches!(
            lister.store_for(""),
            Err(StorageError::InvalidBucket(_))
        ));
    }
}
