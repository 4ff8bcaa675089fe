use httpmock::{Mock, MockServer};
use serde_json::{json, Value};

/// Stand-in for the PDF generation service.
pub struct PdfServiceMock {
    mock_server: MockServer,
}

impl PdfServiceMock {
    pub async fn start() -> Self {
        Self { mock_server: MockServer::start_async().await }
    }

    /// To get the server URL
    pub fn url(&self) -> String {
        self.mock_server.base_url()
    }

    pub async fn mock_generate_pdf(&self, pdf: &'static [u8]) -> Mock<'_> {
        self.mock_server
            .mock_async(|when, then| {
                when.method("POST").path("/generate_pdf");
                then.status(200).header("content-type", "application/pdf").body(pdf);
            })
            .await
    }

    pub async fn mock_generate_bulk_pdfs(&self, status: u16, response_body: Value) -> Mock<'_> {
        self.mock_server
            .mock_async(|when, then| {
                when.method("POST").path("/generate_bulk_pdfs").body_includes("name=\"photosZip\"");
                then.status(status).json_body(response_body);
            })
            .await
    }

    pub async fn mock_status(&self, response_body: Value) -> Mock<'_> {
        self.mock_server
            .mock_async(|when, then| {
                when.method("GET").path("/check_bulk_pdfs_status");
                then.status(200).json_body(response_body);
            })
            .await
    }

    pub async fn mock_download_zip(&self, archive: &'static [u8]) -> Mock<'_> {
        self.mock_server
            .mock_async(|when, then| {
                when.method("GET").path("/download_zip");
                then.status(200).header("content-type", "application/zip").body(archive);
            })
            .await
    }

    pub async fn mock_cancel(&self, message: &str) -> Mock<'_> {
        self.mock_server
            .mock_async(|when, then| {
                when.method("POST").path("/cancel");
                then.status(200).json_body(json!({ "message": message }));
            })
            .await
    }
}
