use std::path::PathBuf;

use assert_matches::assert_matches;
use bytes::Bytes;
use generator_client_interface::{GeneratorClientError, MockGeneratorClient, SingleJobDraft, ValidationError};
use rstest::rstest;

use crate::artifacts::{ArtifactStoreError, MockArtifactStore};
use crate::jobs::single_job::generate_single_pdf;
use crate::jobs::ControllerError;
use crate::state::Phase;
use crate::tests::common::{png, single_draft, MemoryArtifactStore, SurfaceEvent};
use crate::tests::config::TestConfigBuilder;

#[rstest]
#[tokio::test]
async fn single_job_saves_pdf_named_after_the_person() {
    let mut generator = MockGeneratorClient::new();
    generator
        .expect_submit_single_job()
        .times(1)
        .withf(|request| request.name() == "Jane Doe" && request.quote().is_empty())
        .returning(|_| Ok(Bytes::from_static(b"%PDF-1.4")));
    let store = MemoryArtifactStore::default();

    let services = TestConfigBuilder::new()
        .configure_generator_client(generator.into())
        .configure_artifact_store(store.clone().into())
        .build();

    let draft = SingleJobDraft { quote: Some(String::new()), ..single_draft("Jane Doe") };
    let path = generate_single_pdf(&services.config, draft).await.unwrap();

    assert_eq!(path, PathBuf::from("Jane_Doe.pdf"));
    assert_eq!(store.saved(), vec![("Jane_Doe.pdf".to_string(), Bytes::from_static(b"%PDF-1.4"))]);
    assert_eq!(services.surface.statuses(), vec!["Generating PDF...", "PDF generated successfully!"]);
}

#[rstest]
#[tokio::test]
async fn single_job_never_touches_the_bulk_slot() {
    let mut generator = MockGeneratorClient::new();
    generator.expect_submit_single_job().returning(|_| Ok(Bytes::from_static(b"%PDF")));
    let services = TestConfigBuilder::new()
        .configure_generator_client(generator.into())
        .configure_artifact_store(MemoryArtifactStore::default().into())
        .build();

    generate_single_pdf(&services.config, single_draft("Jane")).await.unwrap();

    let state = services.config.lifecycle().state();
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.outcome().is_none());
    assert_eq!(services.surface.count(&SurfaceEvent::ShowProgress), 0);
}

#[rstest]
#[case::no_logo(SingleJobDraft { name: "Jane".to_string(), ..Default::default() }, "Please select a logo file.")]
#[case::no_logo_no_name(SingleJobDraft::default(), "Please select a logo file.")]
#[case::blank_name(single_draft("  "), "Please enter a name.")]
#[case::bad_logo(SingleJobDraft { logo: Some(png("logo.svg")), ..single_draft("Jane") }, "Invalid logo file type")]
#[case::bad_color(
    SingleJobDraft { name_color: Some("red".to_string()), ..single_draft("Jane") },
    "Invalid name color"
)]
#[tokio::test]
async fn single_job_validation_sends_nothing(#[case] draft: SingleJobDraft, #[case] message: &str) {
    // Dummy generator and store: any call fails the test.
    let services = TestConfigBuilder::new().build();

    let err = generate_single_pdf(&services.config, draft).await.unwrap_err();

    assert_matches!(err, ControllerError::Validation(_));
    assert_eq!(services.surface.statuses(), vec![message]);
}

#[rstest]
#[case::service_error(GeneratorClientError::Rejected("No logo file provided".to_string()), "Error: No logo file provided")]
#[case::fallback(
    GeneratorClientError::Rejected("Network response was not ok".to_string()),
    "Error: Network response was not ok"
)]
#[tokio::test]
async fn single_job_rejection_is_reported(#[case] rejection: GeneratorClientError, #[case] message: &str) {
    let mut generator = MockGeneratorClient::new();
    let mut rejection = Some(rejection);
    generator.expect_submit_single_job().times(1).returning(move |_| Err(rejection.take().unwrap()));

    let services = TestConfigBuilder::new().configure_generator_client(generator.into()).build();

    let err = generate_single_pdf(&services.config, single_draft("Jane")).await.unwrap_err();

    assert_matches!(err, ControllerError::Generator(GeneratorClientError::Rejected(_)));
    assert_eq!(services.surface.last_status().as_deref(), Some(message));
}

#[rstest]
#[tokio::test]
async fn single_job_reports_save_failures() {
    let mut generator = MockGeneratorClient::new();
    generator.expect_submit_single_job().times(1).returning(|_| Ok(Bytes::from_static(b"%PDF")));
    let mut store = MockArtifactStore::new();
    store.expect_save().times(1).returning(|file_name, _| {
        Err(ArtifactStoreError::Write {
            path: PathBuf::from(file_name),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    });

    let services = TestConfigBuilder::new()
        .configure_generator_client(generator.into())
        .configure_artifact_store(store.into())
        .build();

    let err = generate_single_pdf(&services.config, single_draft("Jane")).await.unwrap_err();

    assert_matches!(err, ControllerError::Artifact(_));
    assert_eq!(services.surface.last_status().as_deref(), Some("Error: Failed to write Jane.pdf: read-only"));
}

#[test]
fn validation_errors_keep_their_message() {
    let err = ControllerError::from(ValidationError::MissingCsv);
    assert_eq!(err.to_string(), "Please select a CSV file.");
}
