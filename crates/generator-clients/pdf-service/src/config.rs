use url::Url;

pub const GENERATE_PDF_PATH: &str = "generate_pdf";
pub const GENERATE_BULK_PDFS_PATH: &str = "generate_bulk_pdfs";
pub const CHECK_BULK_PDFS_STATUS_PATH: &str = "check_bulk_pdfs_status";
pub const DOWNLOAD_ZIP_PATH: &str = "download_zip";
pub const CANCEL_PATH: &str = "cancel";

/// File name the cropped photo is uploaded under.
pub const CROPPED_PHOTO_FILE_NAME: &str = "cropped.jpg";

/// Settings for the PDF generation web service.
#[derive(Debug, Clone)]
pub struct PdfServiceValidatedArgs {
    /// Base url of the service, e.g. `http://127.0.0.1:5000`.
    pub service_url: Url,
}
