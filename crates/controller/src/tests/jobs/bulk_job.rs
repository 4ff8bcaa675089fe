use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use generator_client_interface::{BulkJobAccepted, BulkJobDraft, GeneratorClientError, MockGeneratorClient};
use rstest::rstest;

use crate::jobs::bulk_job::generate_bulk_pdfs;
use crate::jobs::cancel::cancel_bulk_job;
use crate::jobs::ControllerError;
use crate::state::{Outcome, Phase};
use crate::tests::common::{bulk_draft, GatedGenerator, PollStep, SurfaceEvent};
use crate::tests::config::TestConfigBuilder;

#[rstest]
#[case::no_logo(BulkJobDraft { logo: None, ..bulk_draft() }, "Please select a logo file.")]
#[case::no_csv(BulkJobDraft { records_csv: None, ..bulk_draft() }, "Please select a CSV file.")]
#[case::no_zip(BulkJobDraft { photos_zip: None, ..bulk_draft() }, "Please select a ZIP file containing photos.")]
#[case::nothing(BulkJobDraft::default(), "Please select a logo file.")]
#[tokio::test]
async fn bulk_job_with_missing_input_sends_nothing(#[case] draft: BulkJobDraft, #[case] message: &str) {
    // Dummy generator: any request fails the test.
    let services = TestConfigBuilder::new().build();

    let err = generate_bulk_pdfs(services.config.clone(), draft).await.unwrap_err();

    assert_matches!(err, ControllerError::Validation(_));
    assert_eq!(services.surface.statuses(), vec![message]);
    assert_eq!(services.config.lifecycle().state().phase(), Phase::Idle);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn accepted_bulk_job_starts_running_with_progress_shown() {
    let generator = Arc::new(GatedGenerator::new([PollStep::Hang]));
    let services = TestConfigBuilder::new().configure_generator_client(generator.clone().into()).build();

    let monitor = generate_bulk_pdfs(services.config.clone(), bulk_draft()).await.unwrap();

    let state = services.config.lifecycle().state();
    assert_eq!(state.phase(), Phase::Running);
    assert!(state.job().is_some_and(|job| job.is_live()));
    assert_eq!(
        services.surface.events(),
        vec![SurfaceEvent::Status("Generating PDFs...".to_string()), SurfaceEvent::ShowProgress]
    );

    cancel_bulk_job(&services.config).await;
    monitor.await.unwrap();
}

#[rstest]
#[tokio::test]
async fn rejected_bulk_job_sets_error_marker_and_starts_no_monitor() {
    let mut generator = MockGeneratorClient::new();
    generator
        .expect_submit_bulk_job()
        .times(1)
        .returning(|_| Err(GeneratorClientError::Rejected("Error reading CSV file: bad header".to_string())));
    generator.expect_poll_job_status().never();

    let services = TestConfigBuilder::new().configure_generator_client(generator.into()).build();

    let err = generate_bulk_pdfs(services.config.clone(), bulk_draft()).await.unwrap_err();

    assert_matches!(err, ControllerError::Generator(GeneratorClientError::Rejected(_)));
    assert_eq!(
        services.surface.events(),
        vec![
            SurfaceEvent::Status("Generating PDFs...".to_string()),
            SurfaceEvent::Status("Error: Error reading CSV file: bad header".to_string()),
            SurfaceEvent::HideProgress,
        ]
    );
    let state = services.config.lifecycle().state();
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.outcome(), Some(Outcome::Rejected));
    assert!(state.job().is_none());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn second_bulk_job_is_refused_while_one_is_live() {
    let mut generator = MockGeneratorClient::new();
    generator
        .expect_submit_bulk_job()
        .times(1)
        .returning(|_| Ok(BulkJobAccepted { message: Some("PDF generation started.".to_string()) }));
    generator.expect_poll_job_status().returning(|| Ok(generator_client_interface::JobStatus::Running));
    generator.expect_cancel_job().times(1).returning(|| Ok(Default::default()));

    let services = TestConfigBuilder::new().configure_generator_client(generator.into()).build();

    let monitor = generate_bulk_pdfs(services.config.clone(), bulk_draft()).await.unwrap();
    let err = generate_bulk_pdfs(services.config.clone(), bulk_draft()).await.unwrap_err();

    assert_matches!(err, ControllerError::JobInProgress);
    assert_eq!(services.surface.last_status().as_deref(), Some("A bulk job is already in progress."));
    assert_eq!(services.config.lifecycle().state().phase(), Phase::Running);

    cancel_bulk_job(&services.config).await;
    monitor.await.unwrap();
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn new_bulk_job_can_start_after_the_previous_one_settled() {
    let generator = Arc::new(GatedGenerator::new([]));
    let services = TestConfigBuilder::new().configure_generator_client(generator.clone().into()).build();

    let first = generate_bulk_pdfs(services.config.clone(), bulk_draft()).await.unwrap();
    let first_job = services.config.lifecycle().state().job().cloned().unwrap();
    cancel_bulk_job(&services.config).await;
    first.await.unwrap();

    let second = generate_bulk_pdfs(services.config.clone(), bulk_draft()).await.unwrap();
    let second_job = services.config.lifecycle().state().job().cloned().unwrap();

    assert!(!first_job.is_live());
    assert!(second_job.is_live());
    assert_ne!(first_job.id(), second_job.id());

    cancel_bulk_job(&services.config).await;
    second.await.unwrap();
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn abandoned_submission_frees_the_slot() {
    let generator = Arc::new(GatedGenerator::new([PollStep::Hang]).with_hanging_submits(1));
    let services = TestConfigBuilder::new().configure_generator_client(generator.clone().into()).build();

    let abandoned =
        tokio::time::timeout(Duration::from_secs(1), generate_bulk_pdfs(services.config.clone(), bulk_draft())).await;
    assert!(abandoned.is_err());

    let state = services.config.lifecycle().state();
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.job().is_none());

    let monitor = generate_bulk_pdfs(services.config.clone(), bulk_draft()).await.unwrap();
    assert_eq!(services.config.lifecycle().state().phase(), Phase::Running);

    cancel_bulk_job(&services.config).await;
    monitor.await.unwrap();
}
