pub mod terminal;

use mockall::automock;

/// Sink for user-visible feedback: one status line plus a modal
/// "in progress" indicator.
#[automock]
pub trait StatusSurface: Send + Sync {
    /// Replaces the status line.
    fn update_status(&self, message: &str);
    fn show_progress(&self);
    fn hide_progress(&self);
}
