use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser as _;
use color_eyre::eyre::eyre;
use controller::assets::{load_bulk_draft, load_single_draft};
use controller::cli::job::{BulkJobCliArgs, SingleJobCliArgs};
use controller::cli::{JobCmd, RunCmd};
use controller::config::{init_config, Config};
use controller::jobs::{bulk_job, cancel, single_job};
use controller::state::Outcome;
use controller::telemetry::{setup_analytics, shutdown_analytics};
use dotenvy::dotenv;

/// Run one generation job
#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    dotenv().ok();
    color_eyre::install()?;

    let run_cmd = RunCmd::parse();
    let instrumentation_params = run_cmd
        .validate_instrumentation_params()
        .map_err(|e| eyre!("Failed to validate instrumentation params: {e}"))?;
    let tracer_provider = setup_analytics(&instrumentation_params);

    let config = init_config(&run_cmd)?;

    let succeeded = match &run_cmd.job {
        JobCmd::Single(args) => run_single(&config, args).await,
        JobCmd::Bulk(args) => run_bulk(Arc::clone(&config), args).await,
    };

    shutdown_analytics(tracer_provider);
    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn run_single(config: &Config, args: &SingleJobCliArgs) -> bool {
    let draft = match load_single_draft(args).await {
        Ok(draft) => draft,
        Err(err) => {
            config.report(&format!("Error: {err}"));
            return false;
        }
    };
    single_job::generate_single_pdf(config, draft).await.is_ok()
}

/// Waits for the monitor to settle the job. Ctrl-C cancels it instead.
async fn run_bulk(config: Arc<Config>, args: &BulkJobCliArgs) -> bool {
    let draft = match load_bulk_draft(args).await {
        Ok(draft) => draft,
        Err(err) => {
            config.report(&format!("Error: {err}"));
            return false;
        }
    };
    let Ok(mut monitor) = bulk_job::generate_bulk_pdfs(Arc::clone(&config), draft).await else {
        return false;
    };

    let monitor_result = tokio::select! {
        joined = &mut monitor => joined,
        _ = tokio::signal::ctrl_c() => {
            cancel::cancel_bulk_job(&config).await;
            monitor.await
        }
    };
    if let Err(err) = monitor_result {
        tracing::error!(error = %err, "Bulk job monitor crashed.");
        return false;
    }

    config.lifecycle().state().outcome() == Some(Outcome::Completed)
}
