#[cfg(feature = "storage-local")]
use crate::LocalLister;
#[cfg(feature = "storage-s3")]
use crate::S3Lister;
use crate::{ObjectLister, StorageBackend, StorageError, StorageResult};
use gdview_core::AppConfig;
use std::sync::Arc;

/// Create a listing backend based on configuration
pub async fn create_lister(config: &AppConfig) -> StorageResult<Arc<dyn ObjectLister>> {
    match config.storage_backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let region = config.s3_region.clone().ok_or_else(|| {
                StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
            })?;
            let endpoint = config.s3_endpoint.clone();

            Ok(Arc::new(S3Lister::new(region, endpoint)))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 listing backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;

            let lister = LocalLister::new(base_path).await?;
            Ok(Arc::new(lister))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local listing backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
