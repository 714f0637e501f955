//! Note priority levels and their presentation.

use std::fmt;
use std::str::FromStr;

use crate::core::error::NoteError;

/// Urgency attached to a note. The discriminants are the values used by the
/// priority `<select>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    #[default]
    Minor = 0,
    Major = 1,
    Blocker = 2,
}

/// Everything the list needs to draw a priority: glyph, Fluent message id of
/// the label and the automation id of the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityStyle {
    pub icon: &'static str,
    pub label_key: &'static str,
    pub test_id: &'static str,
}

const MINOR_STYLE: PriorityStyle = PriorityStyle {
    icon: "⌄",
    label_key: "minor",
    test_id: "NOTE_ITEM_PRIORITY_MINOR_ICON",
};

const MAJOR_STYLE: PriorityStyle = PriorityStyle {
    icon: "⌃",
    label_key: "major",
    test_id: "NOTE_ITEM_PRIORITY_MAJOR_ICON",
};

const BLOCKER_STYLE: PriorityStyle = PriorityStyle {
    icon: "!",
    label_key: "blocker",
    test_id: "NOTE_ITEM_PRIORITY_BLOCKER_ICON",
};

impl Priority {
    /// Selection order in the add-note form.
    pub const ALL: [Priority; 3] = [Priority::Minor, Priority::Major, Priority::Blocker];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn style(self) -> &'static PriorityStyle {
        match self {
            Priority::Minor => &MINOR_STYLE,
            Priority::Major => &MAJOR_STYLE,
            Priority::Blocker => &BLOCKER_STYLE,
        }
    }

    /// Lowercase name used for CSS modifiers (`priority-icon--blocker`).
    pub fn slug(self) -> &'static str {
        match self {
            Priority::Minor => "minor",
            Priority::Major => "major",
            Priority::Blocker => "blocker",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = NoteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::Minor),
            1 => Ok(Priority::Major),
            2 => Ok(Priority::Blocker),
            other => Err(NoteError::InvalidPriority(other.to_string())),
        }
    }
}

impl FromStr for Priority {
    type Err = NoteError;

    /// Parses the numeric form value (`"0"`, `"1"`, `"2"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        raw.parse::<u8>()
            .map_err(|_| NoteError::InvalidPriority(raw.to_string()))
            .and_then(Priority::try_from)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
