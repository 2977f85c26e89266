//! The record list store
//!
//! An insertion-ordered, in-memory collection of records with a strict
//! `Idle -> Loading -> Idle` lifecycle around every asynchronous operation.
//! The list itself is copy-on-write: observers hold `Arc` snapshots that a
//! later mutation can never change out from under them.
//!
//! Mutations are serialized through a single operation gate per store. A
//! second operation attempted while one is in flight observes
//! [`StoreOutcome::Busy`] - the loading-flag submit gate of the UI, enforced
//! at the owner of the data.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use core_kernel::{Record, RecordSource};

use crate::confirm::{ConfirmationPrompt, ConfirmationRequest};
use crate::notify::Notifier;
use crate::token::OperationToken;

/// Lifecycle state of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Idle,
    Loading,
}

/// How a store operation resolved
///
/// Operations never return `Err`: every failure is caught, reported through
/// the notification channel, and folded into one of these outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum StoreOutcome {
    /// The operation completed and the list reflects it
    Completed,
    /// A draft failed validation; nothing was submitted
    Invalid,
    /// The target record does not exist; the list is unchanged
    NotFound,
    /// The user cancelled the confirmation prompt; the list is unchanged
    Declined,
    /// The data source reported a failure; the list is unchanged
    Failed,
    /// Another operation is already in flight; nothing was attempted
    Busy,
}

impl StoreOutcome {
    /// Returns true when the operation completed successfully
    pub fn is_completed(&self) -> bool {
        matches!(self, StoreOutcome::Completed)
    }
}

/// Clears the loading flag when an operation scope ends
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn begin(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// An in-memory ordered collection of records with CRUD operations and a
/// loading/idle lifecycle, fed by a swappable data source.
pub struct RecordStore<R: Record> {
    source: Arc<dyn RecordSource<R>>,
    records: RwLock<Arc<Vec<R>>>,
    op_gate: Mutex<()>,
    loading: AtomicBool,
    notifier: Notifier,
}

impl<R: Record> RecordStore<R> {
    /// Creates an empty store over the given data source
    pub fn new(source: Arc<dyn RecordSource<R>>, notifier: Notifier) -> Self {
        Self {
            source,
            records: RwLock::new(Arc::new(Vec::new())),
            op_gate: Mutex::new(()),
            loading: AtomicBool::new(false),
            notifier,
        }
    }

    /// Returns the current list snapshot; later mutations never alter it
    pub fn snapshot(&self) -> Arc<Vec<R>> {
        Arc::clone(&self.records.read().expect("records lock poisoned"))
    }

    /// Returns the record with the given id, if present
    pub fn get(&self, id: R::Id) -> Option<R> {
        self.snapshot().iter().find(|r| r.id() == id).cloned()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns true when no records are held
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Returns true while an asynchronous operation is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Current lifecycle state
    pub fn state(&self) -> StoreState {
        if self.is_loading() {
            StoreState::Loading
        } else {
            StoreState::Idle
        }
    }

    /// Notification handle shared with this store
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Loads the full record list from the data source.
    ///
    /// On failure the prior list is left untouched and the failure is
    /// reported as an error notification.
    pub async fn fetch_all(&self) -> StoreOutcome {
        let Ok(_guard) = self.op_gate.try_lock() else {
            return self.busy("fetch_all");
        };
        let _loading = LoadingGuard::begin(&self.loading);

        match self.source.fetch_all().await {
            Ok(list) => {
                debug!(kind = R::KIND, count = list.len(), "fetched records");
                self.replace(list);
                StoreOutcome::Completed
            }
            Err(err) => {
                warn!(kind = R::KIND, error = %err, "fetch failed");
                self.notifier
                    .error(format!("Failed to fetch {}s", R::KIND));
                StoreOutcome::Failed
            }
        }
    }

    /// Creates a record from a draft and appends it to the list.
    pub async fn create(&self, draft: R::Draft, token: &OperationToken) -> StoreOutcome {
        let Ok(_guard) = self.op_gate.try_lock() else {
            return self.busy("create");
        };
        let _loading = LoadingGuard::begin(&self.loading);

        match self.source.create(draft).await {
            Ok(record) => {
                debug!(kind = R::KIND, id = %record.id(), "record created");
                let mut next = self.snapshot().as_ref().clone();
                next.push(record);
                self.replace(next);
                self.notify_success(token, format!("{} created successfully", title(R::KIND)));
                StoreOutcome::Completed
            }
            Err(err) => {
                warn!(kind = R::KIND, error = %err, "create failed");
                self.notify_error(token, format!("Failed to create {}", R::KIND));
                StoreOutcome::Failed
            }
        }
    }

    /// Replaces the mutable fields of the record with the given id.
    ///
    /// A missing id is the distinct [`StoreOutcome::NotFound`], never a
    /// silent success. The record keeps its position in the list.
    pub async fn update(&self, id: R::Id, draft: R::Draft, token: &OperationToken) -> StoreOutcome {
        let Ok(_guard) = self.op_gate.try_lock() else {
            return self.busy("update");
        };
        let _loading = LoadingGuard::begin(&self.loading);

        match self.source.update(id, draft).await {
            Ok(updated) => {
                debug!(kind = R::KIND, %id, "record updated");
                let next: Vec<R> = self
                    .snapshot()
                    .iter()
                    .map(|r| {
                        if r.id() == id {
                            updated.clone()
                        } else {
                            r.clone()
                        }
                    })
                    .collect();
                self.replace(next);
                self.notify_success(token, format!("{} updated successfully", title(R::KIND)));
                StoreOutcome::Completed
            }
            Err(err) if err.is_not_found() => {
                warn!(kind = R::KIND, %id, "update target missing");
                self.notify_error(token, format!("{} not found", title(R::KIND)));
                StoreOutcome::NotFound
            }
            Err(err) => {
                warn!(kind = R::KIND, %id, error = %err, "update failed");
                self.notify_error(token, format!("Failed to update {}", R::KIND));
                StoreOutcome::Failed
            }
        }
    }

    /// Deletes the record with the given id after explicit confirmation.
    ///
    /// A declined prompt leaves the store unchanged without entering the
    /// loading state. Deleting a missing id leaves the store unchanged and
    /// reports [`StoreOutcome::NotFound`].
    pub async fn delete(
        &self,
        id: R::Id,
        confirm: &dyn ConfirmationPrompt,
        token: &OperationToken,
    ) -> StoreOutcome {
        let request = ConfirmationRequest::destructive(
            format!("Delete {}", title(R::KIND)),
            format!("Are you sure you want to delete this {}?", R::KIND),
        );
        if !confirm.confirm(request).await {
            debug!(kind = R::KIND, %id, "delete declined");
            return StoreOutcome::Declined;
        }

        let Ok(_guard) = self.op_gate.try_lock() else {
            return self.busy("delete");
        };
        let _loading = LoadingGuard::begin(&self.loading);

        match self.source.delete(id).await {
            Ok(()) => {
                debug!(kind = R::KIND, %id, "record deleted");
                let next: Vec<R> = self
                    .snapshot()
                    .iter()
                    .filter(|r| r.id() != id)
                    .cloned()
                    .collect();
                self.replace(next);
                self.notify_success(token, format!("{} deleted successfully", title(R::KIND)));
                StoreOutcome::Completed
            }
            Err(err) if err.is_not_found() => {
                warn!(kind = R::KIND, %id, "delete target missing");
                self.notify_error(token, format!("{} not found", title(R::KIND)));
                StoreOutcome::NotFound
            }
            Err(err) => {
                warn!(kind = R::KIND, %id, error = %err, "delete failed");
                self.notify_error(token, format!("Failed to delete {}", R::KIND));
                StoreOutcome::Failed
            }
        }
    }

    /// Applies a synchronous in-place field update (e.g. an active toggle).
    ///
    /// No confirmation, no latency, no notification of its own - callers
    /// compose their own message. Because this path cannot await the
    /// operation gate, it fails fast with [`StoreOutcome::Busy`] instead of
    /// interleaving with a pending mutation.
    pub fn patch(&self, id: R::Id, mutate: impl FnOnce(&mut R)) -> StoreOutcome {
        let Ok(_guard) = self.op_gate.try_lock() else {
            return self.busy("patch");
        };

        let mut next = self.snapshot().as_ref().clone();
        match next.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                mutate(record);
                self.replace(next);
                StoreOutcome::Completed
            }
            None => {
                warn!(kind = R::KIND, %id, "patch target missing");
                StoreOutcome::NotFound
            }
        }
    }

    fn replace(&self, next: Vec<R>) {
        *self.records.write().expect("records lock poisoned") = Arc::new(next);
    }

    fn busy(&self, operation: &str) -> StoreOutcome {
        debug!(kind = R::KIND, operation, "store busy, operation skipped");
        StoreOutcome::Busy
    }

    fn notify_success(&self, token: &OperationToken, message: String) {
        if token.is_cancelled() {
            debug!(kind = R::KIND, %message, "notification suppressed");
        } else {
            self.notifier.success(message);
        }
    }

    fn notify_error(&self, token: &OperationToken, message: String) {
        if token.is_cancelled() {
            debug!(kind = R::KIND, %message, "notification suppressed");
        } else {
            self.notifier.error(message);
        }
    }
}

fn title(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
