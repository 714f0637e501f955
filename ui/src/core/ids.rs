//! Note identifiers and the generator seam used to mint them.

use std::fmt;

use uuid::Uuid;

/// Opaque, immutable note identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    pub fn new<T: Into<String>>(raw: T) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh note ids. Uniqueness is whatever the implementation guarantees.
pub trait IdGenerator {
    fn next_id(&mut self) -> NoteId;
}

/// Random UUID v4 ids (the production generator).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> NoteId {
        NoteId(Uuid::new_v4().to_string())
    }
}

/// Counter-based ids (`note-1`, `note-2`, ...). Deterministic, handy in tests and previews.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SequentialIds {
    issued: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> NoteId {
        self.issued += 1;
        NoteId(format!("note-{}", self.issued))
    }
}
