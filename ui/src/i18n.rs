//! Internationalization (i18n) support for `notekeep-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/notekeep-ui.ftl   (fallback/reference)
//!   ro-RO/notekeep-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("add-note");
//! ```
//!
//! The app ships exactly the languages in [`Language`]. Switching goes through
//! [`set_language`], which reports failures instead of silently staying on the
//! fallback, so the caller can surface a notice.
use std::fmt;
use std::str::FromStr;
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{info, warn};
use unic_langid::LanguageIdentifier;

use crate::core::error::LocaleError;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("add-note")
///     t!("language-change-failed", reason = "…")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "notekeep-ui";

const FALLBACK_TAG: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(new_loader);

static INIT: Once = Once::new();

/// A UI language the app ships translations for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Romanian,
}

impl Language {
    /// Order of the language chips.
    pub const ALL: [Language; 2] = [Language::English, Language::Romanian];

    /// Short code accepted by [`set_language`] (`"en"`, `"ro"`).
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Romanian => "ro",
        }
    }

    /// Name of the embedded locale folder.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Romanian => "ro-RO",
        }
    }

    /// Fluent message id of the language's display name.
    pub fn label_key(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Romanian => "romanian",
        }
    }

    pub fn test_id(self) -> &'static str {
        match self {
            Language::English => "SELECT_LANGUAGE_EN",
            Language::Romanian => "SELECT_LANGUAGE_RO",
        }
    }

    pub fn identifier(self) -> Result<LanguageIdentifier, LocaleError> {
        Ok(self.tag().parse()?)
    }

    fn from_identifier(id: &LanguageIdentifier) -> Option<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == id.language.as_str())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| {
                lang.code().eq_ignore_ascii_case(code) || lang.tag().eq_ignore_ascii_case(code)
            })
            .ok_or_else(|| LocaleError::Unsupported(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn new_loader() -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_TAG
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
}

/// Initialize i18n (idempotent). Starts in [`Language::default`].
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = activate(&LOADER, Language::default()) {
            warn!(%err, "failed selecting default language; continuing with fallback");
        }
    });
}

/// Loads `lang` into `loader` and checks it actually became the active language.
pub fn activate(loader: &FluentLanguageLoader, lang: Language) -> Result<(), LocaleError> {
    let requested = lang.identifier()?;
    i18n_embed::select(loader, &Localizations, std::slice::from_ref(&requested))?;

    let active = loader.current_language();
    if active != requested {
        return Err(LocaleError::NotActivated { requested, active });
    }
    Ok(())
}

/// Switch the global language at runtime.
pub fn set_language(lang: Language) -> Result<(), LocaleError> {
    init();
    activate(&LOADER, lang)?;
    info!(language = %lang, "language switched");
    Ok(())
}

/// Language currently loaded into the global loader.
pub fn current_language() -> Language {
    Language::from_identifier(&LOADER.current_language()).unwrap_or_default()
}

/// Look up a message whose id is only known at runtime (e.g. a priority label).
pub fn tr(key: &str) -> String {
    LOADER.get(key)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Subscribes the calling component to the shared language signal (provided
/// by `NotesApp`) and returns the active language. Components call this so
/// they re-render with fresh strings after a switch.
pub fn use_language() -> Language {
    let lang: Option<Signal<Language>> = try_use_context::<Signal<Language>>();
    lang.map(|signal| signal()).unwrap_or_default()
}
