use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::status::StatusSurface;

const PROGRESS_BANNER: &str = "Working... press Ctrl-C to cancel.";

/// Writes status lines to stdout and the progress indicator to stderr.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    progress_visible: AtomicBool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_progress_visible(&self) -> bool {
        self.progress_visible.load(Ordering::Acquire)
    }
}

impl StatusSurface for TerminalSurface {
    fn update_status(&self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{message}").and_then(|_| stdout.flush()) {
            tracing::warn!(error = %err, "Failed to write status line");
        }
    }

    fn show_progress(&self) {
        if !self.progress_visible.swap(true, Ordering::AcqRel) {
            eprintln!("{PROGRESS_BANNER}");
        }
    }

    fn hide_progress(&self) {
        self.progress_visible.store(false, Ordering::Release);
    }
}
