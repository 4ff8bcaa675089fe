use clap::Args;

use crate::constants::DEFAULT_POLL_INTERVAL_MS;

#[derive(Debug, Clone, Args)]
pub struct ServiceCliArgs {
    /// How often a running bulk job is polled, in milliseconds.
    #[arg(env = "PDFGEN_POLL_INTERVAL_MS", long, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,
}
