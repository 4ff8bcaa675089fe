pub mod client;
pub mod config;
pub mod error;
pub mod types;

use async_trait::async_trait;
use bytes::Bytes;
use generator_client_interface::{
    BulkJobAccepted, BulkJobRequest, CancelAck, GeneratorClient, GeneratorClientError, JobStatus, SingleJobRequest,
};

use crate::client::PdfServiceClient;
use crate::config::PdfServiceValidatedArgs;
use crate::error::PdfServiceError;

/// [`GeneratorClient`] backed by the PDF generation web service.
#[derive(Debug)]
pub struct PdfGeneratorService {
    pdf_client: PdfServiceClient,
}

#[async_trait]
impl GeneratorClient for PdfGeneratorService {
    #[tracing::instrument(skip(self, request), fields(name = %request.name()))]
    async fn submit_single_job(&self, request: &SingleJobRequest) -> Result<Bytes, GeneratorClientError> {
        let pdf = self.pdf_client.generate_pdf(request).await?;
        tracing::debug!(bytes = pdf.len(), "Received generated PDF");
        Ok(pdf)
    }

    #[tracing::instrument(skip_all)]
    async fn submit_bulk_job(&self, request: &BulkJobRequest) -> Result<BulkJobAccepted, GeneratorClientError> {
        let response = self.pdf_client.generate_bulk_pdfs(request).await?;
        tracing::debug!(message = ?response.message, "Bulk PDF generation accepted");
        Ok(response.into())
    }

    #[tracing::instrument(skip(self))]
    async fn poll_job_status(&self) -> Result<JobStatus, GeneratorClientError> {
        let response = self.pdf_client.check_bulk_pdfs_status().await?;
        tracing::trace!(?response, "Bulk PDF status response");
        Ok(response.into())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_bulk_artifact(&self) -> Result<Bytes, GeneratorClientError> {
        Ok(self.pdf_client.download_zip().await?)
    }

    #[tracing::instrument(skip(self))]
    async fn cancel_job(&self) -> Result<CancelAck, GeneratorClientError> {
        Ok(self.pdf_client.cancel().await?.into())
    }
}

impl PdfGeneratorService {
    pub fn new(pdf_client: PdfServiceClient) -> Self {
        Self { pdf_client }
    }

    pub fn new_with_args(args: &PdfServiceValidatedArgs) -> Result<Self, PdfServiceError> {
        let pdf_client = PdfServiceClient::new(args.service_url.clone())?;
        tracing::debug!(service_url = %args.service_url, "PDF service client instantiated");
        Ok(Self::new(pdf_client))
    }
}
