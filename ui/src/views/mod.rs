mod notes_app;
pub use notes_app::NotesApp;
