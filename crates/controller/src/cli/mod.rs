use std::time::Duration;

use clap::{Parser, Subcommand};
use generator::GeneratorParams;
use pdf_service::config::PdfServiceValidatedArgs;
use storage::StorageParams;

use crate::artifacts::local::LocalStorageValidatedArgs;
use crate::config::ServiceParams;
use crate::telemetry::InstrumentationParams;

pub mod generator;
pub mod instrumentation;
pub mod job;
pub mod service;
pub mod storage;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate branded PDFs through the PDF generation service", long_about = None)]
pub struct RunCmd {
    #[command(subcommand)]
    pub job: JobCmd,

    // Generator
    #[clap(flatten)]
    pub pdf_service_args: generator::PdfServiceCliArgs,

    // Storage
    #[clap(flatten)]
    pub local_storage_args: storage::LocalStorageCliArgs,

    // Service
    #[clap(flatten)]
    pub service_args: service::ServiceCliArgs,

    #[clap(flatten)]
    pub instrumentation_args: instrumentation::InstrumentationCliArgs,
}

#[derive(Subcommand, Debug)]
pub enum JobCmd {
    /// Generate a single PDF and save it as `<name>.pdf`.
    Single(job::SingleJobCliArgs),
    /// Generate one PDF per CSV record and save them as a ZIP archive.
    Bulk(job::BulkJobCliArgs),
}

impl RunCmd {
    pub fn validate_generator_params(&self) -> Result<GeneratorParams, String> {
        let service_url = self.pdf_service_args.pdf_service_url.clone();
        if service_url.cannot_be_a_base() {
            return Err(format!("{service_url} cannot be used as a service base URL"));
        }
        Ok(GeneratorParams::PdfService(PdfServiceValidatedArgs { service_url }))
    }

    pub fn validate_storage_params(&self) -> Result<StorageParams, String> {
        Ok(StorageParams::Local(LocalStorageValidatedArgs { output_dir: self.local_storage_args.output_dir.clone() }))
    }

    pub fn validate_service_params(&self) -> Result<ServiceParams, String> {
        match self.service_args.poll_interval_ms {
            0 => Err("Poll interval must be greater than zero".to_string()),
            millis => Ok(ServiceParams { poll_interval: Duration::from_millis(millis) }),
        }
    }

    pub fn validate_instrumentation_params(&self) -> Result<InstrumentationParams, String> {
        Ok(InstrumentationParams {
            otel_service_name: self.instrumentation_args.otel_service_name.clone().unwrap_or_else(|| "pdfgen".to_string()),
            otel_collector_endpoint: self.instrumentation_args.otel_collector_endpoint.clone(),
            log_level: self.instrumentation_args.log_level,
        })
    }
}
