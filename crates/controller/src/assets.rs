use std::path::{Path, PathBuf};

use generator_client_interface::{Asset, BulkJobDraft, SingleJobDraft};

use crate::cli::job::{BulkJobCliArgs, SingleJobCliArgs};

#[derive(Debug, thiserror::Error)]
#[error("Failed to read {}: {source}", path.display())]
pub struct AssetError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

/// Loads the file at `path`, keeping its base name as the upload file name.
pub async fn read_asset(path: &Path) -> Result<Asset, AssetError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| AssetError { path: path.to_path_buf(), source })?;
    let file_name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    Ok(Asset::new(file_name, bytes))
}

async fn read_optional(path: Option<&Path>) -> Result<Option<Asset>, AssetError> {
    match path {
        Some(path) => Ok(Some(read_asset(path).await?)),
        None => Ok(None),
    }
}

pub async fn load_single_draft(args: &SingleJobCliArgs) -> Result<SingleJobDraft, AssetError> {
    Ok(SingleJobDraft {
        logo: read_optional(args.logo.as_deref()).await?,
        name: args.name.clone(),
        quote: args.quote.clone(),
        photo: read_optional(args.photo.as_deref()).await?,
        name_color: args.name_color.clone(),
        quote_color: args.quote_color.clone(),
    })
}

pub async fn load_bulk_draft(args: &BulkJobCliArgs) -> Result<BulkJobDraft, AssetError> {
    Ok(BulkJobDraft {
        logo: read_optional(args.logo.as_deref()).await?,
        records_csv: read_optional(args.csv.as_deref()).await?,
        photos_zip: read_optional(args.photos_zip.as_deref()).await?,
        name_color: args.name_color.clone(),
        quote_color: args.quote_color.clone(),
    })
}
