//! Error and warning types for locale tables.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while loading or validating a locale table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No table exists for the requested locale code.
    #[error("unknown locale '{code}'{}", did_you_mean(.suggestions))]
    UnknownLocale {
        code: String,
        suggestions: Vec<String>,
    },

    /// File I/O error when reading a table file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A JSON table could not be decoded.
    #[error("invalid JSON table for '{language}': {source}")]
    Json {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    /// The same key is defined twice.
    #[error("duplicate key '{key}' in locale '{language}'")]
    DuplicateKey { language: String, key: String },

    /// A required key is absent.
    #[error("locale '{language}' is missing required key '{key}'{}", did_you_mean(.suggestions))]
    MissingKey {
        language: String,
        key: String,
        suggestions: Vec<String>,
    },

    /// A plural entry has no `other` rule, so some counts have no form.
    #[error("entry '{key}' in locale '{language}' has no default ('other') rule")]
    MissingDefaultRule { language: String, key: String },

    /// An entry never mentions the placeholder its role requires.
    #[error("entry '{key}' in locale '{language}' never mentions ':{placeholder}'")]
    MissingPlaceholder {
        language: String,
        key: String,
        placeholder: String,
    },

    /// An entry has the wrong shape for its role.
    #[error("entry '{key}' in locale '{language}': {reason}")]
    InvalidEntry {
        language: String,
        key: String,
        reason: String,
    },
}

/// An error that occurred while resolving or formatting a phrase.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No plural form of the entry matches the count.
    #[error("entry '{key}' has no form for count {count}")]
    NoMatchingForm { key: String, count: u64 },

    /// A month or weekday index outside the calendar's range.
    #[error("{kind} index {index} is out of range 1..={max}")]
    IndexOutOfRange {
        kind: CalendarField,
        index: usize,
        max: usize,
    },

    /// The table has no entry with this key.
    #[error("locale '{language}' has no entry '{key}'")]
    MissingEntry { language: String, key: String },

    /// Loading the locale table failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The date engine rejected a computation.
    #[error("date engine error: {0}")]
    Engine(#[from] jiff::Error),
}

/// The calendar field an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarField {
    Month,
    Weekday,
}

impl Display for CalendarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CalendarField::Month => write!(f, "month"),
            CalendarField::Weekday => write!(f, "weekday"),
        }
    }
}

/// A non-fatal problem found in a locale table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// A key that no formatter ever reads, probably a typo.
    #[error("unknown key '{key}' in locale '{language}'{}", did_you_mean(.suggestions))]
    UnknownKey {
        language: String,
        key: String,
        suggestions: Vec<String>,
    },

    /// A key defined by the translation but not by the source table.
    #[error("key '{key}' in locale '{language}' is not defined by the source locale")]
    NotInSource { language: String, key: String },

    /// The translation uses different placeholders than the source entry.
    #[error(
        "key '{key}' in locale '{language}' uses placeholders [{}] but the source uses [{}]",
        .translation_placeholders.join(", "),
        .source_placeholders.join(", ")
    )]
    PlaceholderMismatch {
        language: String,
        key: String,
        source_placeholders: Vec<String>,
        translation_placeholders: Vec<String>,
    },
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - Limit to 3 suggestions, sorted by distance
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

/// Format suggestions as a message suffix.
fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
