use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::i18n;
use crate::t;

use super::engine::{Note, NoteBoard};
use super::priority::Priority;

/// Note list, add-note form and delete confirmation dialog, all driven by
/// the one `NoteBoard` signal.
#[component]
pub fn NotesView(board: Signal<NoteBoard>) -> Element {
    let mut board = board;
    // Re-render with fresh strings whenever the language changes.
    let _lang = i18n::use_language();

    let snapshot = board();
    let has_error = snapshot.has_error();
    let selected = snapshot.priority();
    let placeholder = t!("please-write-new-note");
    let text_field_class = if has_error {
        "add-note__field add-note__field--error"
    } else {
        "add-note__field"
    };
    let items = snapshot
        .notes()
        .iter()
        .map(|note| (note.id.to_string(), note.clone()));

    rsx! {
        ul { class: "note-list", "data-test-id": "NOTE_LIST",
            for (key, note) in items {
                NoteItem { key: "{key}", note, board }
            }
        }

        form {
            class: "add-note",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit(board);
            },

            div { class: "add-note__field",
                label { class: "add-note__label", r#for: "add-note-priority", {t!("priority")} }
                select {
                    id: "add-note-priority",
                    class: "add-note__priority",
                    "data-test-id": "ADD_NOTE_PRIORITY_SELECT",
                    value: "{selected.value()}",
                    onchange: move |evt: FormEvent| select_priority(board, &evt.value()),
                    for priority in Priority::ALL {
                        option {
                            key: "{priority.value()}",
                            value: "{priority.value()}",
                            selected: priority == selected,
                            {i18n::tr(priority.style().label_key)}
                        }
                    }
                }
            }

            div { class: text_field_class,
                label { class: "add-note__label", r#for: "add-note-text",
                    {t!("new-note")}
                    span { class: "add-note__required", aria_hidden: "true", " *" }
                }
                input {
                    id: "add-note-text",
                    class: "add-note__input",
                    r#type: "text",
                    required: true,
                    aria_invalid: has_error,
                    placeholder: "{placeholder}",
                    value: "{snapshot.draft()}",
                    "data-test-id": "ADD_NOTE_TEXT_INPUT",
                    oninput: move |evt: FormEvent| board.with_mut(|b| b.update_draft(evt.value())),
                }
                if has_error {
                    p { class: "add-note__helper", role: "alert", {t!("note-text-is-required")} }
                }
            }

            button {
                r#type: "submit",
                class: "button button--primary",
                disabled: has_error,
                "data-test-id": "ADD_NOTE_SAVE_BUTTON",
                {t!("add-note")}
            }
        }

        if snapshot.delete_flow().is_open() {
            DeleteDialog { board }
        }
    }
}

#[component]
fn NoteItem(note: Note, board: Signal<NoteBoard>) -> Element {
    let mut board = board;
    let _lang = i18n::use_language();

    let style = note.priority.style();
    let title = i18n::tr(style.label_key);
    let icon_class = format!("priority-icon priority-icon--{}", note.priority.slug());
    let id = note.id.clone();

    rsx! {
        li { class: "note-item", "data-test-id": "NOTE_ITEM",
            span { class: "note-item__icon", "data-test-id": "NOTE_ITEM_ICON_CONTAINER",
                span {
                    class: "{icon_class}",
                    title: "{title}",
                    "data-test-id": style.test_id,
                    {style.icon}
                }
            }
            span { class: "note-item__text", "data-test-id": "NOTE_ITEM_TEXT", "{note.text}" }
            button {
                r#type: "button",
                class: "note-item__delete",
                aria_label: t!("delete-note"),
                "data-test-id": "NOTE_ITEM_DELETE_ACTION",
                onclick: move |_| {
                    board.with_mut(|b| b.request_delete(id.clone()));
                },
                "🗑"
            }
        }
    }
}

#[component]
fn DeleteDialog(board: Signal<NoteBoard>) -> Element {
    let mut board = board;
    let _lang = i18n::use_language();

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| board.with_mut(|b| b.cancel_delete()),
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "delete-note-title",
                "data-test-id": "DELETE_NOTE_CONFIRMATION",
                onclick: move |evt| evt.stop_propagation(),
                h2 { id: "delete-note-title", class: "dialog__title", {t!("delete-note-confirmation")} }
                p { class: "dialog__body", {t!("are-you-sure-delete")} }
                div { class: "dialog__actions",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        "data-test-id": "DELETE_NOTE_CONFIRMATION_NO",
                        onclick: move |_| board.with_mut(|b| b.cancel_delete()),
                        {t!("no")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        autofocus: true,
                        "data-test-id": "DELETE_NOTE_CONFIRMATION_YES",
                        onclick: move |_| {
                            board.with_mut(|b| b.confirm_delete());
                        },
                        {t!("yes-delete")}
                    }
                }
            }
        }
    }
}

fn submit(mut board: Signal<NoteBoard>) {
    if let Err(err) = board.with_mut(|b| b.submit()) {
        debug!(%err, "note not added");
    }
}

fn select_priority(mut board: Signal<NoteBoard>, raw: &str) {
    if let Err(err) = board.with_mut(|b| b.select_priority_value(raw)) {
        warn!(%err, "ignored priority selection");
    }
}
