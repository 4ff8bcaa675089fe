use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::eyre;
use generator_client_interface::GeneratorClient;
use pdf_service::PdfGeneratorService;

use crate::artifacts::local::LocalArtifactStore;
use crate::artifacts::ArtifactStore;
use crate::cli::generator::GeneratorParams;
use crate::cli::storage::StorageParams;
use crate::cli::RunCmd;
use crate::state::JobLifecycle;
use crate::status::terminal::TerminalSurface;
use crate::status::StatusSurface;

#[derive(Debug, Clone)]
pub struct ServiceParams {
    pub poll_interval: Duration,
}

/// The controller context. One instance owns the bulk job slot, so every
/// submitter, the monitor and the cancellation path share it via `Arc`.
pub struct Config {
    /// Period between two status queries of a running bulk job
    poll_interval: Duration,
    /// The service that renders documents
    generator_client: Arc<dyn GeneratorClient>,
    /// Where user-facing feedback goes
    status_surface: Box<dyn StatusSurface>,
    /// Where generated files are saved
    artifact_store: Box<dyn ArtifactStore>,
    lifecycle: JobLifecycle,
}

/// Initializes the controller context from the command line
pub fn init_config(run_cmd: &RunCmd) -> color_eyre::Result<Arc<Config>> {
    let service_params =
        run_cmd.validate_service_params().map_err(|e| eyre!("Failed to validate service params: {e}"))?;

    let generator_params =
        run_cmd.validate_generator_params().map_err(|e| eyre!("Failed to validate generator params: {e}"))?;
    let generator_client = build_generator_client(&generator_params)?;

    let storage_params =
        run_cmd.validate_storage_params().map_err(|e| eyre!("Failed to validate storage params: {e}"))?;
    let artifact_store = build_artifact_store(&storage_params);

    Ok(Arc::new(Config::new(
        service_params.poll_interval,
        generator_client,
        Box::new(TerminalSurface::new()),
        artifact_store,
    )))
}

impl Config {
    pub fn new(
        poll_interval: Duration,
        generator_client: Arc<dyn GeneratorClient>,
        status_surface: Box<dyn StatusSurface>,
        artifact_store: Box<dyn ArtifactStore>,
    ) -> Self {
        Self { poll_interval, generator_client, status_surface, artifact_store, lifecycle: JobLifecycle::new() }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Returns the generator client
    pub fn generator_client(&self) -> &Arc<dyn GeneratorClient> {
        &self.generator_client
    }

    /// Returns the status surface
    pub fn status_surface(&self) -> &dyn StatusSurface {
        self.status_surface.as_ref()
    }

    /// Returns the artifact store
    pub fn artifact_store(&self) -> &dyn ArtifactStore {
        self.artifact_store.as_ref()
    }

    pub fn lifecycle(&self) -> &JobLifecycle {
        &self.lifecycle
    }

    /// Shows `message` on the status line and remembers it as the latest one.
    pub fn report(&self, message: &str) {
        tracing::debug!(message, "Status updated");
        self.lifecycle.record_message(message);
        self.status_surface.update_status(message);
    }
}

/// Builds the generator client for the configured service
pub fn build_generator_client(generator_params: &GeneratorParams) -> color_eyre::Result<Arc<dyn GeneratorClient>> {
    match generator_params {
        GeneratorParams::PdfService(pdf_service_params) => {
            let service = PdfGeneratorService::new_with_args(pdf_service_params)
                .map_err(|e| eyre!("Failed to build the PDF service client: {e}"))?;
            Ok(Arc::new(service))
        }
    }
}

pub fn build_artifact_store(storage_params: &StorageParams) -> Box<dyn ArtifactStore> {
    match storage_params {
        StorageParams::Local(local_params) => Box::new(LocalArtifactStore::new_with_args(local_params)),
    }
}
