//! Feedback collaborators: notification banners and confirmation dialogs.
//!
//! Both are cosmetic concerns owned by the embedding shell; the widget only
//! needs a message sink and a yes/no answer. The blocking `confirm()` dialog
//! of the original page is modeled as a synchronous boolean request so the
//! clear-cart path stays testable without a real dialog.

/// Sink for transient user-facing confirmation messages.
pub trait Notifier {
    /// Show `message` to the shopper.
    fn notify(&mut self, message: &str);
}

/// Notifier that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _message: &str) {}
}

/// Notifier that reports messages through `tracing`, for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        tracing::info!(%message, "notification");
    }
}

/// A blocking yes/no confirmation request.
pub trait ConfirmDialog {
    /// Ask the shopper to confirm; `true` means go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Dialog that accepts every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmDialog for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Dialog that declines every request.
///
/// The right default when no real dialog is attached: a clear that nobody
/// confirmed must not wipe the slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl ConfirmDialog for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}
