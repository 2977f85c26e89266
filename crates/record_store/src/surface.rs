//! Draft/edit reconciliation for modal editor surfaces
//!
//! A surface is either closed, open in create mode (draft holds field
//! defaults, no target id), or open in edit mode (draft seeded from an
//! existing record, target id set). Re-targeting reseeds the draft
//! synchronously before anything is shown; closing clears both the draft and
//! the target so no stale state leaks into the next create.

use core_kernel::Record;

use crate::token::OperationToken;

/// Whether the surface creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode<Id> {
    Create,
    Edit(Id),
}

/// The state of one modal editor surface
#[derive(Debug)]
pub struct EditorSurface<R: Record> {
    mode: Option<EditorMode<R::Id>>,
    draft: Option<R::Draft>,
    token: OperationToken,
}

impl<R: Record> Default for EditorSurface<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> EditorSurface<R> {
    /// Creates a closed surface
    pub fn new() -> Self {
        Self {
            mode: None,
            draft: None,
            token: OperationToken::new(),
        }
    }

    /// Opens the surface in create mode with default field values
    pub fn open_create(&mut self) {
        self.token = OperationToken::new();
        self.mode = Some(EditorMode::Create);
        self.draft = Some(R::Draft::default());
    }

    /// Opens the surface in edit mode, seeding the draft from the record
    pub fn open_edit(&mut self, record: &R) {
        self.token = OperationToken::new();
        self.mode = Some(EditorMode::Edit(record.id()));
        self.draft = Some(record.draft());
    }

    /// Closes the surface, cancelling any in-flight operation's notification
    /// and clearing the draft and target
    pub fn close(&mut self) {
        self.token.cancel();
        self.mode = None;
        self.draft = None;
    }

    /// Returns true while the surface is open
    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    /// Current mode, if open
    pub fn mode(&self) -> Option<EditorMode<R::Id>> {
        self.mode
    }

    /// The record being edited, if the surface is open in edit mode
    pub fn edit_target(&self) -> Option<R::Id> {
        match self.mode {
            Some(EditorMode::Edit(id)) => Some(id),
            _ => None,
        }
    }

    /// The open draft, if any
    pub fn draft(&self) -> Option<&R::Draft> {
        self.draft.as_ref()
    }

    /// Mutable access to the open draft, if any
    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        self.draft.as_mut()
    }

    /// The cancellation token for operations launched from this surface
    pub fn token(&self) -> OperationToken {
        self.token.clone()
    }
}
