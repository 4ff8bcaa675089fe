use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// What the controller is currently doing with the bulk job slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Running,
    Cancelling,
}

/// How the last bulk job ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Completed,
    /// Generation completed but the archive could not be fetched or saved.
    DownloadFailed,
    Failed,
    Cancelled,
    CancelFailed,
    NotStarted,
    StatusCheckFailed,
    Rejected,
}

/// An accepted bulk job. Its only observable property is whether it is still
/// live, i.e. whether a monitor may still be polling on its behalf.
#[derive(Debug, Clone)]
pub struct JobHandle {
    id: u64,
    token: CancellationToken,
}

impl JobHandle {
    fn new(id: u64) -> Self {
        Self { id, token: CancellationToken::new() }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stops the job locally. Calling it more than once has no further effect.
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Resolves once [`JobHandle::stop`] has been called.
    pub fn stopped(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

/// Snapshot of the controller as seen by the status surface and the CLI.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    phase: Phase,
    message: Option<String>,
    outcome: Option<Outcome>,
    job: Option<JobHandle>,
}

impl ControllerState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last status line shown to the user.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn job(&self) -> Option<&JobHandle> {
        self.job.as_ref()
    }
}

/// Owner of the bulk job slot. All mutations go through the named transitions
/// below, each applied atomically on the watch channel, so a terminal status
/// and a cancel request can never both claim the same job.
#[derive(Debug)]
pub struct JobLifecycle {
    sender: watch::Sender<ControllerState>,
    next_job_id: AtomicU64,
}

impl Default for JobLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl JobLifecycle {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ControllerState::default());
        Self { sender, next_job_id: AtomicU64::new(1) }
    }

    pub fn state(&self) -> ControllerState {
        self.sender.borrow().clone()
    }

    pub fn record_message(&self, message: &str) {
        self.sender.send_modify(|state| state.message = Some(message.to_string()));
    }

    /// `idle -> submitting`. Returns the phase that blocked the transition otherwise.
    pub fn begin_submit(&self) -> Result<(), Phase> {
        let mut blocked_by = None;
        self.sender.send_if_modified(|state| {
            if state.phase != Phase::Idle {
                blocked_by = Some(state.phase);
                return false;
            }
            state.phase = Phase::Submitting;
            true
        });
        blocked_by.map_or(Ok(()), Err)
    }

    /// `submitting -> running`, arming a fresh job handle. Any handle left over
    /// from an earlier job is stopped before the new one is armed.
    pub fn start(&self) -> Option<JobHandle> {
        let id = self.next_job_id.fetch_add(1, Ordering::Relaxed);
        let mut started = None;
        self.sender.send_if_modified(|state| {
            if state.phase != Phase::Submitting {
                return false;
            }
            if let Some(previous) = state.job.take() {
                previous.stop();
            }
            let job = JobHandle::new(id);
            state.phase = Phase::Running;
            state.job = Some(job.clone());
            started = Some(job);
            true
        });
        started
    }

    /// `submitting -> idle` after the service declined the job.
    pub fn reject(&self) {
        self.sender.send_if_modified(|state| {
            if state.phase != Phase::Submitting {
                return false;
            }
            state.phase = Phase::Idle;
            state.outcome = Some(Outcome::Rejected);
            true
        });
    }

    /// `submitting -> idle` when a submission was abandoned before the service
    /// answered. The previous outcome is left as it was.
    pub fn abort_submit(&self) -> bool {
        self.sender.send_if_modified(|state| {
            if state.phase != Phase::Submitting {
                return false;
            }
            state.phase = Phase::Idle;
            true
        })
    }

    /// `running -> idle` for `job`. The handle is stopped before anything else
    /// happens. Returns `false` when the job is no longer the live one, in which
    /// case the caller must not act on the outcome.
    pub fn terminate(&self, job: &JobHandle, outcome: Outcome) -> bool {
        self.sender.send_if_modified(|state| {
            let owns_slot = state.job.as_ref().is_some_and(|live| live.id == job.id);
            if state.phase != Phase::Running || !owns_slot {
                return false;
            }
            job.stop();
            state.phase = Phase::Idle;
            state.outcome = Some(outcome);
            state.job = None;
            true
        })
    }

    /// Marks a completed job whose archive never made it to disk.
    pub fn record_download_failure(&self) {
        self.sender.send_if_modified(|state| {
            if state.outcome != Some(Outcome::Completed) {
                return false;
            }
            state.outcome = Some(Outcome::DownloadFailed);
            true
        });
    }

    /// `running -> cancelling`. Stops the live job and hands it back, or returns
    /// `None` when there is nothing to cancel.
    pub fn request_cancel(&self) -> Option<JobHandle> {
        let mut cancelled = None;
        self.sender.send_if_modified(|state| {
            if state.phase != Phase::Running {
                return false;
            }
            let Some(job) = state.job.take() else {
                return false;
            };
            job.stop();
            state.phase = Phase::Cancelling;
            cancelled = Some(job);
            true
        });
        cancelled
    }

    /// `cancelling -> idle`.
    pub fn finish_cancel(&self, outcome: Outcome) {
        self.sender.send_if_modified(|state| {
            if state.phase != Phase::Cancelling {
                return false;
            }
            state.phase = Phase::Idle;
            state.outcome = Some(outcome);
            true
        });
    }
}
