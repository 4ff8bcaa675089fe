use generator_client_interface::GeneratorClientError;
use reqwest::StatusCode;
use utils::http_client::HttpClientError;

#[derive(Debug, thiserror::Error)]
pub enum PdfServiceError {
    #[error("Failed to build the PDF service client: {0}")]
    ClientBuild(#[source] HttpClientError),
    #[error("Failed to generate PDF: {0}")]
    GeneratePdfFailure(#[source] HttpClientError),
    #[error("Failed to start bulk PDF generation: {0}")]
    GenerateBulkPdfsFailure(#[source] HttpClientError),
    #[error("Failed to check bulk PDF generation status: {0}")]
    CheckStatusFailure(#[source] HttpClientError),
    #[error("Failed to download generated PDFs: {0}")]
    DownloadFailure(#[source] HttpClientError),
    #[error("Failed to cancel bulk PDF generation: {0}")]
    CancelFailure(#[source] HttpClientError),
    #[error("PDF service returned an error {status}: {message}")]
    PdfService { status: StatusCode, message: String },
    #[error("Failed to decode PDF service response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<PdfServiceError> for GeneratorClientError {
    fn from(value: PdfServiceError) -> Self {
        match value {
            PdfServiceError::PdfService { message, .. } => Self::Rejected(message),
            PdfServiceError::Decode(e) => Self::InvalidResponse(e.to_string()),
            other => Self::Transport(Box::new(other)),
        }
    }
}
