use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;

use generator_client_interface::{GeneratorClientError, JobStatus};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use crate::config::Config;
use crate::constants::{
    generation_failed, BULK_ARTIFACT_FILE_NAME, GENERATION_CANCELLED, GENERATION_NOT_STARTED, PDFS_GENERATED,
    STATUS_CHECK_FAILED,
};
use crate::jobs::ControllerError;
use crate::state::{JobHandle, Outcome};

/// Spawns the monitor of an accepted bulk job. The task ends on the first
/// terminal status, on a failed status query, or as soon as `job` is stopped.
pub fn spawn_monitor(config: Arc<Config>, job: JobHandle) -> JoinHandle<()> {
    tokio::spawn(monitor_job(config, job))
}

/// Polls the job status once per period. Queries run concurrently in a
/// `JoinSet` so a slow one never delays the next tick, while their results are
/// handled one at a time here. Leaving the loop drops the set, which aborts
/// whatever queries are still in flight.
#[tracing::instrument(skip_all, fields(category = "monitor", job_id = job.id()))]
pub async fn monitor_job(config: Arc<Config>, job: JobHandle) {
    tracing::info!(log_type = "starting", category = "monitor", function_type = "poll", "Bulk job monitor started.");

    let mut ticker = tokio::time::interval(config.poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick is immediate; the first query goes out one period after acceptance.
    ticker.tick().await;

    let mut polls: JoinSet<Result<JobStatus, GeneratorClientError>> = JoinSet::new();
    loop {
        tokio::select! {
            biased;

            _ = job.stopped() => {
                tracing::debug!(in_flight = polls.len(), "Job stopped, discarding in-flight status queries.");
                break;
            }
            Some(joined) = polls.join_next() => {
                let polled = match joined {
                    Ok(polled) => polled.map_err(|err| err.to_string()),
                    Err(err) if err.is_cancelled() => continue,
                    Err(err) => Err(err.to_string()),
                };
                if on_poll_result(&config, &job, polled).await.is_break() {
                    break;
                }
            }
            _ = ticker.tick() => {
                let client = Arc::clone(config.generator_client());
                polls.spawn(async move { client.poll_job_status().await });
            }
        }
    }

    tracing::info!(log_type = "completed", category = "monitor", function_type = "poll", "Bulk job monitor stopped.");
}

async fn on_poll_result(config: &Config, job: &JobHandle, polled: Result<JobStatus, String>) -> ControlFlow<()> {
    let status = match polled {
        Ok(status) => status,
        Err(reason) => {
            tracing::error!(
                log_type = "failed",
                category = "monitor",
                function_type = "poll",
                error = %reason,
                "Status check failed."
            );
            if config.lifecycle().terminate(job, Outcome::StatusCheckFailed) {
                config.status_surface().hide_progress();
                config.report(STATUS_CHECK_FAILED);
            }
            return ControlFlow::Break(());
        }
    };

    if !status.is_terminal() {
        tracing::trace!(?status, "Bulk job still in progress.");
        return ControlFlow::Continue(());
    }

    let (outcome, message) = match status {
        JobStatus::Completed => (Outcome::Completed, PDFS_GENERATED.to_string()),
        JobStatus::Error { exitcode } => (Outcome::Failed, generation_failed(exitcode)),
        JobStatus::Cancelled => (Outcome::Cancelled, GENERATION_CANCELLED.to_string()),
        _ => (Outcome::NotStarted, GENERATION_NOT_STARTED.to_string()),
    };

    if !config.lifecycle().terminate(job, outcome) {
        tracing::debug!(%outcome, "Job already settled elsewhere, ignoring status.");
        return ControlFlow::Break(());
    }
    tracing::info!(%outcome, "Bulk job reached a terminal status.");

    config.status_surface().hide_progress();
    config.report(&message);
    if outcome == Outcome::Completed {
        download_archive(config).await;
    }
    ControlFlow::Break(())
}

async fn download_archive(config: &Config) {
    match fetch_and_save(config).await {
        Ok(path) => {
            tracing::info!(
                log_type = "completed",
                category = "monitor",
                function_type = "download",
                path = %path.display(),
                "Generated PDFs downloaded."
            );
        }
        Err(err) => {
            tracing::error!(
                log_type = "failed",
                category = "monitor",
                function_type = "download",
                error = %err,
                "Failed to download generated PDFs."
            );
            config.lifecycle().record_download_failure();
            config.report(&format!("Error downloading generated PDFs: {err}"));
        }
    }
}

async fn fetch_and_save(config: &Config) -> Result<PathBuf, ControllerError> {
    let archive = config.generator_client().fetch_bulk_artifact().await?;
    Ok(config.artifact_store().save(BULK_ARTIFACT_FILE_NAME, archive).await?)
}
