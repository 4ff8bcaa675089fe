/// Contains the trait and local implementation for saving generated files
pub mod artifacts;
/// Turns CLI file paths into job drafts
pub mod assets;
/// Contains the CLI arguments for the service
pub mod cli;
/// Config of the controller
pub mod config;
/// Status messages and file names shared across jobs
pub mod constants;
/// Single and bulk job flows, the bulk job monitor and cancellation
pub mod jobs;
/// Bulk job slot and its transitions
pub mod state;
/// Where user-facing feedback is shown
pub mod status;
/// Logging and trace export setup
pub mod telemetry;
