use dioxus::prelude::*;

use crate::components::LanguageSwitcher;
use crate::i18n::{self, Language};
use crate::notes::{NoteBoard, NotesView};
use crate::t;

/// Root of the widget. Owns the note board and the shared language signal;
/// platform crates only add their stylesheet around it.
#[component]
pub fn NotesApp() -> Element {
    // Initialize i18n once
    i18n::init();

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    let board = use_signal(NoteBoard::seeded);

    let lang: Language = lang_code();
    let title = t!("app-title");

    #[cfg(debug_assertions)]
    {
        tracing::debug!(language = %lang, notes = board.peek().notes().len(), "NotesApp render");
    }

    rsx! {
        document::Title { "{title}" }

        main { class: "notes-app", lang: lang.code(), "data-test-id": "APP_ROOT",
            LanguageSwitcher {}
            NotesView { board }
        }
    }
}
