//! In-memory note store plus the transient form and dialog state around it.

use tracing::{debug, info, warn};

use crate::core::error::NoteError;
use crate::core::ids::{IdGenerator, NoteId, UuidGenerator};

use super::delete::DeleteFlow;
use super::priority::Priority;

/// A single note. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub priority: Priority,
    pub text: String,
}

/// Notes shown on first launch.
const SEED_NOTES: [(Priority, &str); 5] = [
    (Priority::Minor, "Pay electricity bills"),
    (Priority::Major, "Order food from local grocery store"),
    (Priority::Blocker, "Buy Christmas gifts for my family"),
    (Priority::Blocker, "Call my mother one a day"),
    (
        Priority::Blocker,
        "Finish university project to receive a good grade",
    ),
];

/// Owns the note collection and every piece of UI state that drives it.
///
/// All mutation goes through methods here; the view keeps one `Signal<NoteBoard>`
/// and re-renders whenever it is written.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteBoard<G = UuidGenerator> {
    notes: Vec<Note>,
    priority: Priority,
    draft: String,
    has_error: bool,
    delete: DeleteFlow,
    ids: G,
}

impl NoteBoard<UuidGenerator> {
    /// Board pre-filled with the sample notes.
    pub fn seeded() -> Self {
        Self::seeded_with(UuidGenerator)
    }
}

impl<G: IdGenerator> NoteBoard<G> {
    pub fn with_generator(ids: G) -> Self {
        Self {
            notes: Vec::new(),
            priority: Priority::default(),
            draft: String::new(),
            has_error: false,
            delete: DeleteFlow::Idle,
            ids,
        }
    }

    pub fn seeded_with(ids: G) -> Self {
        let mut board = Self::with_generator(ids);
        for (priority, text) in SEED_NOTES {
            let id = board.ids.next_id();
            board.notes.push(Note {
                id,
                priority,
                text: text.to_string(),
            });
        }
        board
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn delete_flow(&self) -> &DeleteFlow {
        &self.delete
    }

    /// Appends a note. Empty (after trimming) text is rejected: the error
    /// flag is raised and nothing else changes. On success the draft is
    /// cleared along with the error flag.
    pub fn add_note(&mut self, priority: Priority, text: &str) -> Result<NoteId, NoteError> {
        let text = text.trim();
        if text.is_empty() {
            self.has_error = true;
            debug!("rejected empty note");
            return Err(NoteError::EmptyText);
        }

        let id = self.ids.next_id();
        self.notes.push(Note {
            id: id.clone(),
            priority,
            text: text.to_string(),
        });
        self.draft.clear();
        self.has_error = false;
        info!(note_id = %id, %priority, total = self.notes.len(), "note added");
        Ok(id)
    }

    /// Adds the current draft with the selected priority.
    pub fn submit(&mut self) -> Result<NoteId, NoteError> {
        let draft = self.draft.clone();
        self.add_note(self.priority, &draft)
    }

    /// Removes the note with `id`. Missing ids are a no-op.
    pub fn remove_note(&mut self, id: &NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|note| &note.id == id)?;
        let removed = self.notes.remove(index);
        info!(note_id = %id, total = self.notes.len(), "note removed");
        Some(removed)
    }

    pub fn select_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Applies a raw `<select>` value. Unknown values leave the selection as it was.
    pub fn select_priority_value(&mut self, raw: &str) -> Result<(), NoteError> {
        let priority = raw.parse::<Priority>()?;
        self.select_priority(priority);
        Ok(())
    }

    /// Replaces the draft. Any edit acknowledges a pending validation error.
    pub fn update_draft<T: Into<String>>(&mut self, text: T) {
        self.draft = text.into();
        self.has_error = false;
    }

    /// Opens the delete dialog for `id`. Returns `false` (dialog untouched)
    /// when no such note exists.
    pub fn request_delete(&mut self, id: NoteId) -> bool {
        if !self.notes.iter().any(|note| note.id == id) {
            warn!(note_id = %id, "delete requested for unknown note");
            return false;
        }
        debug!(note_id = %id, "delete confirmation opened");
        self.delete.request(id);
        true
    }

    pub fn cancel_delete(&mut self) {
        if let Some(id) = self.delete.take() {
            debug!(note_id = %id, "delete cancelled");
        }
    }

    /// Removes the pending note (if any) and closes the dialog.
    pub fn confirm_delete(&mut self) -> Option<Note> {
        let id = self.delete.take()?;
        self.remove_note(&id)
    }
}
