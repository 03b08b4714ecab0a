//! Transient user notifications (toasts)

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// How long error toasts stay visible
pub const ERROR_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Fire-and-forget user message sink
pub trait Notifier: Send + Sync {
    /// Show `message`, optionally for a limited time. Never fails.
    fn show(&self, message: &str, duration: Option<Duration>);
}

/// A notification as it was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub duration: Option<Duration>,
}

/// Notifier that keeps every message (for testing)
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Just the message texts
    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, message: &str, duration: Option<Duration>) {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notification {
                message: message.to_string(),
                duration,
            });
    }
}
