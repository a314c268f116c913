use std::sync::Arc;

/// Abstract interface for storing uploaded binaries. Swappable per
/// environment: local filesystem for development and tests, S3 in production.
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store the bytes under `key` and return the public retrieval URL.
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;
}

/// Errors that can occur while storing an object.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Upload error: {0}")]
    Upload(String),
}

// Re-export implementations
pub use local::LocalStorage;
pub use s3::S3Storage;

mod local;
mod s3;

/// Build the object storage adapter from config.
pub async fn from_config(
    config: &crate::app::config::Config,
) -> Result<Arc<dyn ObjectStorage>, StorageError> {
    match config.storage_adapter.as_str() {
        "local" => Ok(Arc::new(LocalStorage::new(
            config.storage_root.clone(),
            config.app_url_base().to_string(),
        ))),
        "s3" => {
            let bucket = config
                .s3_bucket
                .clone()
                .ok_or_else(|| StorageError::Config("S3_BUCKET is required for S3 adapter".to_string()))?;
            let region = config
                .s3_region
                .clone()
                .ok_or_else(|| StorageError::Config("S3_REGION is required for S3 adapter".to_string()))?;

            Ok(Arc::new(S3Storage::new(bucket, region).await))
        }
        _ => Err(StorageError::Config(format!(
            "Unknown STORAGE_ADAPTER: {}",
            config.storage_adapter
        ))),
    }
}
