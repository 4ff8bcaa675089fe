use generator_client_interface::{GeneratorClientError, ValidationError};

use crate::artifacts::ArtifactStoreError;

pub mod bulk_job;
pub mod cancel;
pub mod monitor;
pub mod single_job;

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A bulk job is already in progress.")]
    JobInProgress,

    #[error(transparent)]
    Generator(#[from] GeneratorClientError),

    #[error(transparent)]
    Artifact(#[from] ArtifactStoreError),
}
