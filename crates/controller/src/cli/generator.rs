use clap::Args;
use url::Url;

/// Parameters used to config the PDF generation service.
#[derive(Debug, Clone, Args)]
pub struct PdfServiceCliArgs {
    /// Base URL of the PDF generation service.
    #[arg(env = "PDFGEN_SERVICE_URL", long, default_value = "http://127.0.0.1:5000")]
    pub pdf_service_url: Url,
}

#[derive(Debug, Clone)]
pub enum GeneratorParams {
    PdfService(pdf_service::config::PdfServiceValidatedArgs),
}
