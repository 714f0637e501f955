use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::Language;
use crate::notes::Priority;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "notekeep-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message ids every locale must define, one per user-facing label of the widget.
const REQUIRED_IDS: &[&str] = &[
    "select-language",
    "english",
    "romanian",
    "minor",
    "major",
    "blocker",
    "priority",
    "new-note",
    "please-write-new-note",
    "note-text-is-required",
    "add-note",
    "delete-note-confirmation",
    "are-you-sure-delete",
    "no",
    "yes-delete",
];

/// Extract message IDs from a Fluent file: any `<identifier> =` line.
/// Comments, terms (-prefix) and blank lines are ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Collect every literal first argument of `t!("...")` under `src/`.
/// Ids looked up at runtime through `i18n::tr` are checked separately.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        found.extend(translation_keys_in(&content));
    }

    found
}

/// Keys passed to `t!("...")` in one file. A match counts only when `t!` is a
/// whole macro name, so `assert!("...")` and friends are skipped.
fn translation_keys_in(content: &str) -> HashSet<String> {
    const NEEDLE: &str = "t!(\"";

    content
        .match_indices(NEEDLE)
        .filter(|(pos, _)| {
            !content[..*pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        })
        .filter_map(|(pos, _)| {
            let rest = &content[pos + NEEDLE.len()..];
            rest.find('"').map(|end| &rest[..end])
        })
        .filter(|key| !key.is_empty() && key.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn locale_keys(i18n_root: &Path, lang: Language) -> BTreeSet<String> {
    let path = i18n_root.join(lang.tag()).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

fn runtime_ids() -> Vec<&'static str> {
    Priority::ALL
        .iter()
        .map(|p| p.style().label_key)
        .chain(Language::ALL.iter().map(|l| l.label_key()))
        .collect()
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_keys = locale_keys(&i18n_root, Language::English);
    assert!(!fallback_keys.is_empty(), "No message keys parsed from fallback FTL");

    // Required, source-referenced and runtime-looked-up ids must all be in the fallback.
    let referenced = extract_translation_keys_from_source(&crate_root.join("src"));
    let mut missing: Vec<String> = REQUIRED_IDS
        .iter()
        .copied()
        .chain(runtime_ids())
        .map(str::to_string)
        .chain(referenced)
        .filter(|k| !fallback_keys.contains(k))
        .collect();
    missing.sort();
    missing.dedup();
    assert!(
        missing.is_empty(),
        "Translation ids missing in fallback ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );

    // Every other shipped language defines exactly the fallback ids.
    for lang in Language::ALL {
        let keys = locale_keys(&i18n_root, lang);
        let absent: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        let extra: Vec<_> = keys.difference(&fallback_keys).cloned().collect();
        assert!(absent.is_empty(), "{} is missing: {}", lang.tag(), absent.join(", "));
        assert!(extra.is_empty(), "{} has unknown ids: {}", lang.tag(), extra.join(", "));
    }
}

#[test]
fn source_scan_finds_view_labels() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let referenced = extract_translation_keys_from_source(&crate_root.join("src"));
    for id in ["add-note", "yes-delete", "note-text-is-required", "select-language"] {
        assert!(referenced.contains(id), "expected t!(\"{id}\") in src/");
    }
}

#[test]
fn source_scan_ignores_other_macros_ending_in_t() {
    let sample = r#"
        assert!("-1".parse::<u8>().is_ok());
        assert!("x");
        let label = t!("add-note");
        let wrapped = format!("{}", crate::t!("no"));
    "#;
    let keys = translation_keys_in(sample);
    let mut keys: Vec<_> = keys.into_iter().collect();
    keys.sort();
    assert_eq!(keys, ["add-note", "no"]);
}
