//! Screen controllers
//!
//! [`Screen`] is the shape every management screen shares: a record store, a
//! modal editor surface, and the submit/delete/refresh handlers wiring them
//! together. The per-screen modules add what each page needs on top: the
//! doctors' active toggle, the billing ledger handlers, pharmacy price
//! previews, and the patient form's doctor pick list.

pub mod billing;
pub mod doctors;
pub mod patients;
pub mod pharmacy;

pub use billing::BillingScreen;
pub use doctors::DoctorsScreen;
pub use patients::PatientsScreen;
pub use pharmacy::PharmacyScreen;

use std::sync::Arc;
use tracing::warn;
use validator::Validate;

use core_kernel::{validation_messages, Record, RecordSource};
use record_store::{
    ConfirmationPrompt, EditorSurface, Notifier, OperationToken, RecordStore, StoreOutcome,
};

/// One management screen: a store of records plus a modal editor surface
pub struct Screen<R: Record>
where
    R::Draft: Validate,
{
    store: RecordStore<R>,
    surface: EditorSurface<R>,
}

impl<R: Record> Screen<R>
where
    R::Draft: Validate,
{
    /// Creates a screen over the given data source
    pub fn new(source: Arc<dyn RecordSource<R>>, notifier: Notifier) -> Self {
        Self {
            store: RecordStore::new(source, notifier),
            surface: EditorSurface::new(),
        }
    }

    /// The screen's record store
    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    /// The screen's editor surface
    pub fn surface(&self) -> &EditorSurface<R> {
        &self.surface
    }

    /// True while an asynchronous operation gates the submit control
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Reloads the record list from the data source
    pub async fn refresh(&self) -> StoreOutcome {
        self.store.fetch_all().await
    }

    /// Opens the editor in create mode with default field values
    pub fn open_add(&mut self) {
        self.surface.open_create();
    }

    /// Opens the editor in edit mode seeded from the selected record
    pub fn open_edit(&mut self, id: R::Id) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.surface.open_edit(&record);
                true
            }
            None => {
                self.store
                    .notifier()
                    .error(format!("Selected {} no longer exists", R::KIND));
                false
            }
        }
    }

    /// Closes the editor, discarding the draft and suppressing any late
    /// notification from an operation still in flight
    pub fn close_editor(&mut self) {
        self.surface.close();
    }

    /// The open draft, if the editor is showing
    pub fn draft(&self) -> Option<&R::Draft> {
        self.surface.draft()
    }

    /// Mutable access to the open draft
    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        self.surface.draft_mut()
    }

    /// Applies an edit closure to the open draft; returns false when the
    /// editor is closed
    pub fn with_draft(&mut self, edit: impl FnOnce(&mut R::Draft)) -> bool {
        match self.surface.draft_mut() {
            Some(draft) => {
                edit(draft);
                true
            }
            None => false,
        }
    }

    /// Validates the open draft and routes it to the store as a create or
    /// an update, depending on the editor mode. Validation failures are
    /// reported through the notification channel and block submission.
    pub async fn submit(&mut self) -> StoreOutcome {
        let Some(draft) = self.surface.draft().cloned() else {
            warn!(kind = R::KIND, "submit with no open editor");
            return StoreOutcome::Invalid;
        };

        if let Err(errors) = draft.validate() {
            for message in validation_messages(&errors) {
                self.store.notifier().error(message);
            }
            return StoreOutcome::Invalid;
        }

        let token = self.surface.token();
        let outcome = match self.surface.edit_target() {
            Some(id) => self.store.update(id, draft, &token).await,
            None => self.store.create(draft, &token).await,
        };

        if outcome.is_completed() {
            self.surface.close();
        }
        outcome
    }

    /// Deletes a record after the confirmation prompt
    pub async fn delete(&self, id: R::Id, confirm: &dyn ConfirmationPrompt) -> StoreOutcome {
        self.store.delete(id, confirm, &OperationToken::new()).await
    }
}
