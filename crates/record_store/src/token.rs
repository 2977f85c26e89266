//! Per-operation cancellation tokens
//!
//! A token is handed to each store operation launched from an editor surface.
//! Closing the surface cancels the token: the operation still runs to
//! completion and its list effect still lands, but its success or failure
//! notification is suppressed so a dismissed form cannot toast afterwards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag shared between an editor surface and its in-flight
/// operations. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct OperationToken {
    cancelled: Arc<AtomicBool>,
}

impl OperationToken {
    /// Creates a fresh, non-cancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token cancelled
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true once the token has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
