//! Notes: the in-memory store, its delete confirmation flow and the view.

pub mod delete;
pub mod engine;
pub mod priority;
pub mod view;

pub use delete::DeleteFlow;
pub use engine::{Note, NoteBoard};
pub use priority::{Priority, PriorityStyle};
pub use view::NotesView;
