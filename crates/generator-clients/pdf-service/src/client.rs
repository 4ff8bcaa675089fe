use bytes::Bytes;
use generator_client_interface::{Asset, BulkJobRequest, SingleJobRequest, TextColors};
use reqwest::{Method, Response};
use url::Url;
use utils::http_client::{HttpClient, HttpClientError, RequestBuilder};

use crate::config::{
    CANCEL_PATH, CHECK_BULK_PDFS_STATUS_PATH, CROPPED_PHOTO_FILE_NAME, DOWNLOAD_ZIP_PATH, GENERATE_BULK_PDFS_PATH,
    GENERATE_PDF_PATH,
};
use crate::error::PdfServiceError;
use crate::types::{BulkPdfsStatusResponse, ErrorResponse, MessageResponse};

/// Reported when a failed response carries no `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Network response was not ok";

/// PDF service API async wrapper
#[derive(Debug)]
pub struct PdfServiceClient {
    client: HttpClient,
}

trait FormAssets: Sized {
    fn form_asset(self, name: &str, asset: &Asset) -> Self;
    fn form_colors(self, colors: TextColors) -> Self;
}

impl FormAssets for RequestBuilder<'_> {
    fn form_asset(self, name: &str, asset: &Asset) -> Self {
        self.form_file_bytes(name, asset.bytes().clone(), asset.file_name())
    }

    fn form_colors(self, colors: TextColors) -> Self {
        let request = match colors.name {
            Some(color) => self.form_text("nameColor", &color.to_string()),
            None => self,
        };
        match colors.quote {
            Some(color) => request.form_text("quoteColor", &color.to_string()),
            None => request,
        }
    }
}

impl PdfServiceClient {
    pub fn new(url: Url) -> Result<Self, PdfServiceError> {
        let client = HttpClient::builder(url)
            .user_agent(concat!("pdfgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PdfServiceError::ClientBuild)?;
        Ok(Self { client })
    }

    pub async fn generate_pdf(&self, request: &SingleJobRequest) -> Result<Bytes, PdfServiceError> {
        let mut builder = self
            .client
            .request()
            .method(Method::POST)
            .path(GENERATE_PDF_PATH)
            .form_asset("logo", request.logo())
            .form_text("name", request.name())
            .form_text("quote", request.quote());
        if let Some(photo) = request.photo() {
            builder = builder.form_file_bytes("photo", photo.bytes().clone(), CROPPED_PHOTO_FILE_NAME);
        }

        let response = builder.form_colors(request.colors()).send().await.map_err(PdfServiceError::GeneratePdfFailure)?;

        if response.status().is_success() {
            response.bytes().await.map_err(|e| PdfServiceError::GeneratePdfFailure(e.into()))
        } else {
            Err(rejection(response).await)
        }
    }

    pub async fn generate_bulk_pdfs(&self, request: &BulkJobRequest) -> Result<MessageResponse, PdfServiceError> {
        let response = self
            .client
            .request()
            .method(Method::POST)
            .path(GENERATE_BULK_PDFS_PATH)
            .form_asset("logo", request.logo())
            .form_asset("csv", request.records_csv())
            .form_asset("photosZip", request.photos_zip())
            .form_colors(request.colors())
            .send()
            .await
            .map_err(PdfServiceError::GenerateBulkPdfsFailure)?;

        if response.status().is_success() {
            response.json().await.map_err(PdfServiceError::Decode)
        } else {
            Err(rejection(response).await)
        }
    }

    pub async fn check_bulk_pdfs_status(&self) -> Result<BulkPdfsStatusResponse, PdfServiceError> {
        let response = self
            .client
            .request()
            .method(Method::GET)
            .path(CHECK_BULK_PDFS_STATUS_PATH)
            .send()
            .await
            .map_err(PdfServiceError::CheckStatusFailure)?;

        if response.status().is_success() {
            response.json().await.map_err(PdfServiceError::Decode)
        } else {
            Err(rejection(response).await)
        }
    }

    pub async fn download_zip(&self) -> Result<Bytes, PdfServiceError> {
        let response = self
            .client
            .request()
            .method(Method::GET)
            .path(DOWNLOAD_ZIP_PATH)
            .send()
            .await
            .map_err(PdfServiceError::DownloadFailure)?;

        if response.status().is_success() {
            response.bytes().await.map_err(|e| PdfServiceError::DownloadFailure(HttpClientError::from(e)))
        } else {
            Err(rejection(response).await)
        }
    }

    pub async fn cancel(&self) -> Result<MessageResponse, PdfServiceError> {
        let response = self
            .client
            .request()
            .method(Method::POST)
            .path(CANCEL_PATH)
            .send()
            .await
            .map_err(PdfServiceError::CancelFailure)?;

        if response.status().is_success() {
            response.json().await.map_err(PdfServiceError::Decode)
        } else {
            Err(rejection(response).await)
        }
    }
}

async fn rejection(response: Response) -> PdfServiceError {
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.error)
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
    tracing::debug!(%status, %message, "PDF service rejected the request");
    PdfServiceError::PdfService { status, message }
}
