mod request;
mod status;

use async_trait::async_trait;
use bytes::Bytes;
use mockall::automock;

pub use crate::request::*;
pub use crate::status::*;

/// Describes the document generation service as seen by the controller.
///
/// Every method is a single request/response exchange. Implementations must not
/// retry; the controller decides what a failure means for the job.
#[automock]
#[async_trait]
pub trait GeneratorClient: Send + Sync {
    /// Renders one document. On success the returned bytes are the finished artifact.
    async fn submit_single_job(&self, request: &SingleJobRequest) -> Result<Bytes, GeneratorClientError>;

    /// Starts a bulk job on the service. The service tracks at most one bulk job,
    /// so acceptance carries no job identifier.
    async fn submit_bulk_job(&self, request: &BulkJobRequest) -> Result<BulkJobAccepted, GeneratorClientError>;

    /// Fetches the current state of the bulk job.
    async fn poll_job_status(&self) -> Result<JobStatus, GeneratorClientError>;

    /// Downloads the packaged result of a completed bulk job.
    async fn fetch_bulk_artifact(&self) -> Result<Bytes, GeneratorClientError>;

    /// Asks the service to stop the bulk job.
    async fn cancel_job(&self) -> Result<CancelAck, GeneratorClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorClientError {
    /// The service answered and declined the request.
    #[error("{0}")]
    Rejected(String),
    /// The exchange itself failed.
    #[error("Failed to reach the generation service: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The service answered with something that could not be understood.
    #[error("Unexpected response from the generation service: {0}")]
    InvalidResponse(String),
}
