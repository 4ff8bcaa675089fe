pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const BULK_ARTIFACT_FILE_NAME: &str = "generated_pdfs.zip";

pub const GENERATING_PDF: &str = "Generating PDF...";
pub const PDF_GENERATED: &str = "PDF generated successfully!";
pub const GENERATING_PDFS: &str = "Generating PDFs...";
pub const PDFS_GENERATED: &str = "PDFs generated successfully!";
pub const GENERATION_CANCELLED: &str = "PDF generation was cancelled.";
pub const GENERATION_NOT_STARTED: &str = "PDF generation has not started.";
pub const STATUS_CHECK_FAILED: &str = "Error checking generation status.";
pub const CANCEL_ACKNOWLEDGED: &str = "PDF generation cancelled.";
pub const CANCEL_FAILED: &str = "Error cancelling process.";

pub fn generation_failed(exitcode: Option<i64>) -> String {
    match exitcode {
        Some(code) => format!("Error generating PDFs (Exit code: {code})"),
        None => "Error generating PDFs (Exit code: unknown)".to_string(),
    }
}
