//! Error types surfaced by the notes engine and the localization layer.

use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Failures of a note mutation. All of them are recoverable by further input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("note text is empty")]
    EmptyText,

    #[error("'{0}' is not a valid priority")]
    InvalidPriority(String),
}

/// Failures of a runtime language switch.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("language '{0}' is not supported")]
    Unsupported(String),

    #[error("invalid language identifier: {0}")]
    InvalidTag(#[from] unic_langid::LanguageIdentifierError),

    #[error("failed loading localization bundle: {0}")]
    Load(#[from] i18n_embed::I18nEmbedError),

    #[error("requested {requested} but {active} is active")]
    NotActivated {
        requested: LanguageIdentifier,
        active: LanguageIdentifier,
    },
}
