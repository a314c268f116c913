use std::path::PathBuf;

use async_trait::async_trait;

use super::{ObjectStorage, StorageError};

/// Filesystem object storage for local development and tests.
/// Writes under a root directory and returns URLs under the app base URL.
#[derive(Debug)]
pub struct LocalStorage {
    root: PathBuf,
    public_base: String,
}

impl LocalStorage {
    /// Create a new local storage adapter.
    pub fn new(root: impl Into<PathBuf>, public_base: String) -> Self {
        Self {
            root: root.into(),
            public_base,
        }
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let dest = self.root.join(key);
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&dest, &bytes).await?;

        tracing::info!(
            key = %key,
            content_type = %content_type,
            size = bytes.len(),
            "Object stored (local)"
        );

        Ok(format!("{}/uploads/{}", self.public_base, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_writes_the_file_and_builds_the_url() {
        let root = std::env::temp_dir().join(format!(
            "gramtrack-local-storage-{}",
            ulid::Ulid::new().to_string().to_lowercase()
        ));
        let storage = LocalStorage::new(root.clone(), "http://localhost:3000".to_string());

        let url = storage
            .put("projects/abc/site.jpg", "image/jpeg", b"jpegdata".to_vec())
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:3000/uploads/projects/abc/site.jpg");
        let written = tokio::fs::read(root.join("projects/abc/site.jpg")).await.unwrap();
        assert_eq!(written, b"jpegdata");
    }
}
