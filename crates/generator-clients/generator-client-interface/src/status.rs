/// State of the bulk job as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Running,
    Completed,
    /// The generation process exited abnormally. The exit code is opaque and
    /// passed through as reported.
    Error {
        exitcode: Option<i64>,
    },
    Cancelled,
    /// The service has no bulk job on record.
    NotStarted,
    /// Absent or unrecognized status value.
    Unknown,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Error { .. } | JobStatus::Cancelled | JobStatus::NotStarted)
    }
}

/// Acknowledgement that a bulk job was started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkJobAccepted {
    pub message: Option<String>,
}

/// Acknowledgement of a cancellation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelAck {
    pub message: Option<String>,
}
