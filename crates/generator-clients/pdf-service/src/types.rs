use generator_client_interface::{BulkJobAccepted, CancelAck, JobStatus};
use serde::Deserialize;

/// Body the service attaches to a non-success response.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: Option<String>,
}

impl From<MessageResponse> for BulkJobAccepted {
    fn from(value: MessageResponse) -> Self {
        Self { message: value.message }
    }
}

impl From<MessageResponse> for CancelAck {
    fn from(value: MessageResponse) -> Self {
        Self { message: value.message }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkPdfsStatus {
    Running,
    Completed,
    Error,
    Cancelled,
    NotStarted,
    #[serde(other)]
    Unrecognized,
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct BulkPdfsStatusResponse {
    #[serde(default)]
    pub status: Option<BulkPdfsStatus>,
    #[serde(default)]
    pub exitcode: Option<i64>,
}

impl From<BulkPdfsStatusResponse> for JobStatus {
    fn from(value: BulkPdfsStatusResponse) -> Self {
        match value.status {
            Some(BulkPdfsStatus::Running) => JobStatus::Running,
            Some(BulkPdfsStatus::Completed) => JobStatus::Completed,
            Some(BulkPdfsStatus::Error) => JobStatus::Error { exitcode: value.exitcode },
            Some(BulkPdfsStatus::Cancelled) => JobStatus::Cancelled,
            Some(BulkPdfsStatus::NotStarted) => JobStatus::NotStarted,
            Some(BulkPdfsStatus::Unrecognized) | None => JobStatus::Unknown,
        }
    }
}
