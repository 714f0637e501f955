//! Two-step delete confirmation.

use crate::core::ids::NoteId;

/// Whether the delete dialog is open, and for which note.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    Confirming {
        note_id: NoteId,
    },
}

impl DeleteFlow {
    /// Opens the dialog for `note_id`, replacing any pending id.
    pub fn request(&mut self, note_id: NoteId) {
        *self = DeleteFlow::Confirming { note_id };
    }

    /// Closes the dialog and returns the id that was pending, if any.
    pub fn take(&mut self) -> Option<NoteId> {
        match std::mem::take(self) {
            DeleteFlow::Idle => None,
            DeleteFlow::Confirming { note_id } => Some(note_id),
        }
    }

    pub fn pending(&self) -> Option<&NoteId> {
        match self {
            DeleteFlow::Idle => None,
            DeleteFlow::Confirming { note_id } => Some(note_id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DeleteFlow::Confirming { .. })
    }
}
