use std::path::PathBuf;

use clap::Args;

/// Parameters used to config where generated files are written.
#[derive(Debug, Clone, Args)]
pub struct LocalStorageCliArgs {
    /// Directory generated PDFs and archives are saved into.
    #[arg(env = "PDFGEN_OUTPUT_DIR", long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum StorageParams {
    Local(crate::artifacts::local::LocalStorageValidatedArgs),
}
