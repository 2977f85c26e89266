//! User-visible notification channel
//!
//! Success and failure messages surface as transient, non-blocking
//! notifications. The channel is unbounded because notifications are tiny
//! and the consumer (a toast renderer, or stdout in the demo console) drains
//! continuously; if the receiver is gone the message is simply dropped.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A single transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Cloneable sending handle for the notification channel
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: UnboundedSender<Notification>,
}

impl Notifier {
    /// Creates a notifier and the receiver that drains it
    pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Emits a success notification
    pub fn success(&self, message: impl Into<String>) {
        self.push(Severity::Success, message.into());
    }

    /// Emits an informational notification
    pub fn info(&self, message: impl Into<String>) {
        self.push(Severity::Info, message.into());
    }

    /// Emits an error notification
    pub fn error(&self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
    }

    fn push(&self, severity: Severity, message: String) {
        debug!(?severity, %message, "notification");
        let _ = self.tx.send(Notification { severity, message });
    }
}

/// Drains every notification currently queued on the receiver
pub fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        out.push(notification);
    }
    out
}
