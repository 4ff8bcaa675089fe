use std::path::PathBuf;

use clap::Args;

/// Inputs for one PDF.
#[derive(Debug, Clone, Default, Args)]
pub struct SingleJobCliArgs {
    /// Logo image (png, jpg or jpeg).
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Name printed on the document. Also names the saved file.
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long)]
    pub quote: Option<String>,

    /// Already cropped photo (png, jpg or jpeg).
    #[arg(long)]
    pub photo: Option<PathBuf>,

    /// Name text color as `#rrggbb`.
    #[arg(long)]
    pub name_color: Option<String>,

    /// Quote text color as `#rrggbb`.
    #[arg(long)]
    pub quote_color: Option<String>,
}

/// Inputs for a batch of PDFs, one per CSV record.
#[derive(Debug, Clone, Default, Args)]
pub struct BulkJobCliArgs {
    /// Logo image (png, jpg or jpeg).
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// CSV file with the records to render.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// ZIP archive with the photos referenced by the CSV.
    #[arg(long)]
    pub photos_zip: Option<PathBuf>,

    /// Name text color as `#rrggbb`.
    #[arg(long)]
    pub name_color: Option<String>,

    /// Quote text color as `#rrggbb`.
    #[arg(long)]
    pub quote_color: Option<String>,
}
