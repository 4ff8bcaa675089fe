pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use mockall::automock;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// ArtifactStore persists generated documents and archives where the user
/// can pick them up.
#[automock]
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Saves `bytes` under `file_name` and returns where they ended up.
    async fn save(&self, file_name: &str, bytes: Bytes) -> Result<PathBuf, ArtifactStoreError>;
}
