//! Record Store - the shared list-of-records runtime behind every admin screen
//!
//! Each screen owns one [`RecordStore`]: an insertion-ordered, copy-on-write
//! collection of records backed by a swappable [`core_kernel::RecordSource`].
//! Asynchronous operations follow a strict `Idle -> Loading -> Idle`
//! lifecycle; failures surface on the notification channel and never disturb
//! the last known-good list.
//!
//! The crate also provides the pieces the store's callers share:
//!
//! - [`Notifier`]: the transient, non-blocking message channel (toasts)
//! - [`ConfirmationPrompt`]: the blocking confirm/cancel step before deletes
//! - [`EditorSurface`]: create/edit draft reconciliation for modal forms
//! - [`OperationToken`]: per-operation cancellation that suppresses a closed
//!   surface's late notifications

pub mod confirm;
pub mod notify;
pub mod store;
pub mod surface;
pub mod token;

pub use confirm::{AlwaysConfirm, AlwaysDecline, ConfirmationPrompt, ConfirmationRequest};
pub use notify::{Notification, Notifier, Severity};
pub use store::{RecordStore, StoreOutcome, StoreState};
pub use surface::{EditorMode, EditorSurface};
pub use token::OperationToken;
