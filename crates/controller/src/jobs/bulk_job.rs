use std::sync::Arc;

use generator_client_interface::{BulkJobDraft, BulkJobRequest};
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::constants::GENERATING_PDFS;
use crate::jobs::monitor::spawn_monitor;
use crate::jobs::ControllerError;
use crate::state::JobLifecycle;

/// Submits a bulk job and, once the service accepts it, hands it to a freshly
/// spawned monitor whose handle is returned. Only one bulk job may be in
/// flight; a second submission is refused without contacting the service.
#[tracing::instrument(skip_all, fields(category = "bulk_job"), err)]
pub async fn generate_bulk_pdfs(config: Arc<Config>, draft: BulkJobDraft) -> Result<JoinHandle<()>, ControllerError> {
    tracing::info!(log_type = "starting", category = "bulk_job", function_type = "submit", "Bulk PDF generation started.");

    let request = match BulkJobRequest::try_from(draft) {
        Ok(request) => request,
        Err(err) => {
            config.report(&err.to_string());
            return Err(err.into());
        }
    };

    if let Err(phase) = config.lifecycle().begin_submit() {
        tracing::warn!(%phase, "Bulk submission refused, another job holds the slot.");
        let err = ControllerError::JobInProgress;
        config.report(&err.to_string());
        return Err(err);
    }

    let submission = SubmissionGuard::new(config.lifecycle());

    config.report(GENERATING_PDFS);
    let accepted = match config.generator_client().submit_bulk_job(&request).await {
        Ok(accepted) => accepted,
        Err(err) => {
            tracing::error!(
                log_type = "failed",
                category = "bulk_job",
                function_type = "submit",
                error = %err,
                "Bulk PDF generation rejected."
            );
            config.report(&format!("Error: {err}"));
            config.lifecycle().reject();
            config.status_surface().hide_progress();
            return Err(err.into());
        }
    };
    tracing::info!(message = ?accepted.message, "Bulk PDF generation accepted.");

    let Some(job) = config.lifecycle().start() else {
        tracing::error!("Bulk job slot changed hands during submission.");
        return Err(ControllerError::JobInProgress);
    };
    submission.disarm();
    config.status_surface().show_progress();

    tracing::info!(
        log_type = "completed",
        category = "bulk_job",
        function_type = "submit",
        job_id = job.id(),
        "Bulk job handed to the monitor."
    );
    Ok(spawn_monitor(config, job))
}

/// Returns the slot to idle if the submission is dropped while it still holds
/// `submitting`, e.g. when the caller stops waiting for the service.
struct SubmissionGuard<'a> {
    lifecycle: &'a JobLifecycle,
    armed: bool,
}

impl<'a> SubmissionGuard<'a> {
    fn new(lifecycle: &'a JobLifecycle) -> Self {
        Self { lifecycle, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        if self.armed && self.lifecycle.abort_submit() {
            tracing::warn!("Bulk submission abandoned before the service answered.");
        }
    }
}
