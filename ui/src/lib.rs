//! Shared UI crate for Notekeep. The note store, localization and every view live here.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod notes;
pub mod views;

pub mod components {
    // Language chips + failure notice (components/language_switcher.rs)
    pub mod language_switcher;
    pub use language_switcher::LanguageSwitcher;
}

pub use views::NotesApp;

/// Shared theme (ui/assets/theme/main.css). Web links it; desktop inlines the file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
