pub mod mock_server;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser as _;
use controller::cli::RunCmd;
use controller::config::{init_config, Config};
use tempfile::TempDir;

pub use mock_server::PdfServiceMock;

pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Input files on disk plus an empty output directory.
pub struct Workspace {
    inputs: TempDir,
    outputs: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let inputs = tempfile::tempdir().expect("Failed to create input dir");
        std::fs::write(inputs.path().join("logo.png"), b"\x89PNG\r\n").expect("Failed to write logo");
        std::fs::write(inputs.path().join("photo.jpg"), b"\xff\xd8\xff").expect("Failed to write photo");
        std::fs::write(inputs.path().join("people.csv"), b"name,quote\nJane Doe,Stay curious\n")
            .expect("Failed to write csv");
        std::fs::write(inputs.path().join("photos.zip"), b"PK\x03\x04").expect("Failed to write zip");
        Self { inputs, outputs: tempfile::tempdir().expect("Failed to create output dir") }
    }

    pub fn input(&self, file_name: &str) -> String {
        self.inputs.path().join(file_name).display().to_string()
    }

    pub fn output_dir(&self) -> &Path {
        self.outputs.path()
    }

    pub fn output(&self, file_name: &str) -> PathBuf {
        self.outputs.path().join(file_name)
    }

    /// Parses a full command line pointed at `service` and this workspace.
    pub fn run_cmd(&self, service: &PdfServiceMock, job_args: &[&str]) -> RunCmd {
        let poll_interval_ms = POLL_INTERVAL.as_millis().to_string();
        let output_dir = self.output_dir().display().to_string();
        let mut args = vec![
            "pdfgen".to_string(),
            "--pdf-service-url".to_string(),
            service.url(),
            "--output-dir".to_string(),
            output_dir,
            "--poll-interval-ms".to_string(),
            poll_interval_ms,
        ];
        args.extend(job_args.iter().map(|arg| arg.to_string()));
        RunCmd::try_parse_from(args).expect("Failed to parse command line")
    }

    pub fn config(&self, service: &PdfServiceMock, job_args: &[&str]) -> (RunCmd, Arc<Config>) {
        let run_cmd = self.run_cmd(service, job_args);
        let config = init_config(&run_cmd).expect("Failed to init config");
        (run_cmd, config)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
