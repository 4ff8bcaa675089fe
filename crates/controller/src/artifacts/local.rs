use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::artifacts::{ArtifactStore, ArtifactStoreError};

#[derive(Debug, Clone)]
pub struct LocalStorageValidatedArgs {
    pub output_dir: PathBuf,
}

/// Stores artifacts as plain files inside one output directory.
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    output_dir: PathBuf,
}

impl LocalArtifactStore {
    pub fn new_with_args(args: &LocalStorageValidatedArgs) -> Self {
        Self { output_dir: args.output_dir.clone() }
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        // Names come from user input; keep them inside the output directory.
        let flattened = file_name.replace(['/', '\\'], "_");
        let flattened = match flattened.as_str() {
            "" | "." | ".." => "_".to_string(),
            _ => flattened,
        };
        self.output_dir.join(flattened)
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn save(&self, file_name: &str, bytes: Bytes) -> Result<PathBuf, ArtifactStoreError> {
        let path = self.path_for(file_name);
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| ArtifactStoreError::Write { path: self.output_dir.clone(), source })?;
        tokio::fs::write(&path, &bytes).await.map_err(|source| ArtifactStoreError::Write { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Artifact saved");
        Ok(path)
    }
}
