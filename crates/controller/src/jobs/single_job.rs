use std::path::PathBuf;

use generator_client_interface::{SingleJobDraft, SingleJobRequest};

use crate::config::Config;
use crate::constants::{GENERATING_PDF, PDF_GENERATED};
use crate::jobs::ControllerError;

/// Generates one PDF and saves it as `<name>.pdf`. Every failure is reported
/// on the status line before it is returned. The bulk job slot is never touched.
#[tracing::instrument(skip_all, fields(category = "single_job"), err)]
pub async fn generate_single_pdf(config: &Config, draft: SingleJobDraft) -> Result<PathBuf, ControllerError> {
    tracing::info!(
        log_type = "starting",
        category = "single_job",
        function_type = "generate",
        "Single PDF generation started."
    );

    let request = match SingleJobRequest::try_from(draft) {
        Ok(request) => request,
        Err(err) => {
            config.report(&err.to_string());
            return Err(err.into());
        }
    };

    config.report(GENERATING_PDF);
    match render_and_save(config, &request).await {
        Ok(path) => {
            config.report(PDF_GENERATED);
            tracing::info!(
                log_type = "completed",
                category = "single_job",
                function_type = "generate",
                path = %path.display(),
                "Single PDF generation completed."
            );
            Ok(path)
        }
        Err(err) => {
            config.report(&format!("Error: {err}"));
            tracing::error!(
                log_type = "failed",
                category = "single_job",
                function_type = "generate",
                error = %err,
                "Single PDF generation failed."
            );
            Err(err)
        }
    }
}

async fn render_and_save(config: &Config, request: &SingleJobRequest) -> Result<PathBuf, ControllerError> {
    let pdf = config.generator_client().submit_single_job(request).await?;
    Ok(config.artifact_store().save(&request.artifact_file_name(), pdf).await?)
}
