use crate::i18n::{self, Language};
use crate::t;
use dioxus::prelude::*;
use tracing::warn;

/// Language chips. A successful switch updates the shared language signal
/// (which re-renders every subscribed component); a failed one leaves the
/// active chip untouched and shows a notice instead.
#[component]
pub fn LanguageSwitcher() -> Element {
    let active: Signal<Language> = use_context::<Signal<Language>>();
    let mut notice = use_signal(|| Option::<String>::None);
    let current = active();

    rsx! {
        div { class: "language-switcher", "data-test-id": "SELECT_LANGUAGE",
            span { class: "language-switcher__label", {t!("select-language")} ":" }

            div { class: "language-switcher__chips",
                for lang in Language::ALL {
                    button {
                        key: "{lang.code()}",
                        r#type: "button",
                        class: chip_class(lang == current),
                        aria_pressed: lang == current,
                        "data-test-id": lang.test_id(),
                        onclick: move |_| switch_language(lang, active, notice),
                        {i18n::tr(lang.label_key())}
                    }
                }
            }

            if let Some(message) = notice() {
                div { class: "language-switcher__notice", role: "status",
                    span { "{message}" }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        aria_label: t!("dismiss"),
                        onclick: move |_| notice.set(None),
                        "×"
                    }
                }
            }
        }
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "chip chip--active"
    } else {
        "chip"
    }
}

fn switch_language(
    lang: Language,
    mut active: Signal<Language>,
    mut notice: Signal<Option<String>>,
) {
    match i18n::set_language(lang) {
        Ok(()) => {
            notice.set(None);
            active.set(lang);
        }
        Err(err) => {
            warn!(language = %lang, %err, "language switch failed");
            notice.set(Some(t!("language-change-failed", reason = err.to_string())));
        }
    }
}
