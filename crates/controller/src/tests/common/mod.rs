pub mod constants;

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use generator_client_interface::{
    Asset, BulkJobAccepted, BulkJobDraft, BulkJobRequest, CancelAck, GeneratorClient, GeneratorClientError, JobStatus,
    SingleJobDraft, SingleJobRequest,
};
use tokio::sync::Notify;

use crate::artifacts::{ArtifactStore, ArtifactStoreError};
use crate::status::StatusSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Status(String),
    ShowProgress,
    HideProgress,
}

/// Status surface that keeps everything it was asked to show.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Status(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<String> {
        self.statuses().pop()
    }

    pub fn count(&self, wanted: &SurfaceEvent) -> usize {
        self.events().iter().filter(|event| *event == wanted).count()
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl StatusSurface for RecordingSurface {
    fn update_status(&self, message: &str) {
        self.push(SurfaceEvent::Status(message.to_string()));
    }

    fn show_progress(&self) {
        self.push(SurfaceEvent::ShowProgress);
    }

    fn hide_progress(&self) {
        self.push(SurfaceEvent::HideProgress);
    }
}

/// Artifact store that keeps saved files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    saved: Arc<Mutex<Vec<(String, Bytes)>>>,
}

impl MemoryArtifactStore {
    pub fn saved(&self) -> Vec<(String, Bytes)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactStore for MemoryArtifactStore {
    async fn save(&self, file_name: &str, bytes: Bytes) -> Result<PathBuf, ArtifactStoreError> {
        self.saved.lock().unwrap().push((file_name.to_string(), bytes));
        Ok(PathBuf::from(file_name))
    }
}

/// What the next status query of a [`GatedGenerator`] does.
#[derive(Debug, Clone)]
pub enum PollStep {
    Reply(JobStatus),
    /// Never resolves.
    Hang,
    /// Resolves with the status once [`GatedGenerator::release`] is called.
    Gated(JobStatus),
}

/// Generator whose status queries follow a script and can be held open, for
/// exercising interleavings a synchronous mock cannot express.
#[derive(Debug)]
pub struct GatedGenerator {
    steps: Mutex<VecDeque<PollStep>>,
    cancel_reply: Result<Option<String>, String>,
    hanging_submits: AtomicUsize,
    polls: AtomicUsize,
    cancels: AtomicUsize,
    downloads: AtomicUsize,
    poll_started: Notify,
    gate: Notify,
}

impl GatedGenerator {
    pub fn new(steps: impl IntoIterator<Item = PollStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            cancel_reply: Ok(None),
            hanging_submits: AtomicUsize::new(0),
            polls: AtomicUsize::new(0),
            cancels: AtomicUsize::new(0),
            downloads: AtomicUsize::new(0),
            poll_started: Notify::new(),
            gate: Notify::new(),
        }
    }

    pub fn with_cancel_reply(mut self, reply: Result<Option<String>, String>) -> Self {
        self.cancel_reply = reply;
        self
    }

    /// The first `count` bulk submissions never get an answer.
    pub fn with_hanging_submits(self, count: usize) -> Self {
        self.hanging_submits.store(count, Ordering::SeqCst);
        self
    }

    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    pub fn cancels(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }

    pub fn downloads(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    /// Resolves once a status query has been issued.
    pub async fn poll_started(&self) {
        self.poll_started.notified().await;
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl GeneratorClient for GatedGenerator {
    async fn submit_single_job(&self, _request: &SingleJobRequest) -> Result<Bytes, GeneratorClientError> {
        Err(GeneratorClientError::InvalidResponse("single jobs are not scripted".to_string()))
    }

    async fn submit_bulk_job(&self, _request: &BulkJobRequest) -> Result<BulkJobAccepted, GeneratorClientError> {
        let hang = self.hanging_submits.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1)).is_ok();
        if hang {
            std::future::pending::<()>().await;
        }
        Ok(BulkJobAccepted { message: Some("PDF generation started.".to_string()) })
    }

    async fn poll_job_status(&self) -> Result<JobStatus, GeneratorClientError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().unwrap().pop_front().unwrap_or(PollStep::Reply(JobStatus::Running));
        self.poll_started.notify_one();
        match step {
            PollStep::Reply(status) => Ok(status),
            PollStep::Hang => std::future::pending().await,
            PollStep::Gated(status) => {
                self.gate.notified().await;
                Ok(status)
            }
        }
    }

    async fn fetch_bulk_artifact(&self) -> Result<Bytes, GeneratorClientError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        Ok(Bytes::from_static(b"PK-archive"))
    }

    async fn cancel_job(&self) -> Result<CancelAck, GeneratorClientError> {
        self.cancels.fetch_add(1, Ordering::SeqCst);
        match &self.cancel_reply {
            Ok(message) => Ok(CancelAck { message: message.clone() }),
            Err(reason) => Err(GeneratorClientError::Rejected(reason.clone())),
        }
    }
}

pub fn png(name: &str) -> Asset {
    Asset::new(name, &b"\x89PNG"[..])
}

pub fn single_draft(name: &str) -> SingleJobDraft {
    SingleJobDraft { logo: Some(png("logo.png")), name: name.to_string(), ..Default::default() }
}

pub fn bulk_draft() -> BulkJobDraft {
    BulkJobDraft {
        logo: Some(png("logo.png")),
        records_csv: Some(Asset::new("people.csv", &b"name,quote\nJane Doe,Hi\n"[..])),
        photos_zip: Some(Asset::new("photos.zip", &b"PK"[..])),
        name_color: None,
        quote_color: None,
    }
}
