use crate::config::Config;
use crate::constants::{CANCEL_ACKNOWLEDGED, CANCEL_FAILED};
use crate::state::Outcome;

/// Cancels the live bulk job, if any. Polling stops before the request goes
/// out, and whatever an in-flight status query returns afterwards is ignored.
/// The result is never confirmed with the service. Returns `None` without
/// sending anything when no job is live.
#[tracing::instrument(skip_all, fields(category = "cancel"))]
pub async fn cancel_bulk_job(config: &Config) -> Option<Outcome> {
    let Some(job) = config.lifecycle().request_cancel() else {
        tracing::debug!("No live bulk job to cancel.");
        return None;
    };
    tracing::info!(
        log_type = "starting",
        category = "cancel",
        function_type = "cancel",
        job_id = job.id(),
        "Cancelling bulk job."
    );

    let outcome = match config.generator_client().cancel_job().await {
        Ok(ack) => {
            let message = ack.message.as_deref().filter(|message| !message.is_empty()).unwrap_or(CANCEL_ACKNOWLEDGED);
            config.report(message);
            config.status_surface().hide_progress();
            Outcome::Cancelled
        }
        Err(err) => {
            tracing::error!(
                log_type = "failed",
                category = "cancel",
                function_type = "cancel",
                error = %err,
                "Cancellation request failed."
            );
            config.report(CANCEL_FAILED);
            config.status_surface().hide_progress();
            Outcome::CancelFailed
        }
    };

    config.lifecycle().finish_cancel(outcome);
    tracing::info!(log_type = "completed", category = "cancel", function_type = "cancel", %outcome, "Bulk job cancelled.");
    Some(outcome)
}
