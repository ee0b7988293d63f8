//! Load-time checks for locale tables.
//!
//! `validate` rejects tables that could fail while formatting. `lint` reports
//! problems that never break formatting but usually indicate a typo.

use std::collections::BTreeMap;

use crate::parser::{PhraseBody, PhraseDefinition};
use crate::table::error::{LoadError, LoadWarning, compute_suggestions};
use crate::table::keys::{
    DIRECTIONAL, MONTHS, SHORT_SUFFIX, WEEKDAYS, is_unit_override, is_wrapper_override,
    known_keys, required_keys,
};
use crate::types::Unit;

/// Checks every structural rule a table must satisfy before it is usable.
pub fn validate(
    language: &str,
    entries: &BTreeMap<String, PhraseDefinition>,
) -> Result<(), LoadError> {
    let defined: Vec<String> = entries.keys().cloned().collect();
    for key in required_keys() {
        if !entries.contains_key(&key) {
            return Err(LoadError::MissingKey {
                language: language.to_string(),
                suggestions: compute_suggestions(&key, &defined),
                key,
            });
        }
    }

    for (key, entry) in entries {
        if !entry.has_default_rule() {
            return Err(LoadError::MissingDefaultRule {
                language: language.to_string(),
                key: key.clone(),
            });
        }
        if is_calendar_name(key) {
            check_calendar_name(language, entry)?;
        } else if DIRECTIONAL.contains(&key.as_str()) || is_wrapper_override(key) {
            require_placeholder(language, entry, "time")?;
        } else if is_unit(key) || is_unit_override(key) {
            require_placeholder(language, entry, "count")?;
        }
    }
    Ok(())
}

/// Reports keys that no formatter reads, with close matches as suggestions.
pub fn lint(language: &str, entries: &BTreeMap<String, PhraseDefinition>) -> Vec<LoadWarning> {
    let known = known_keys();
    entries
        .keys()
        .filter(|key| !known.contains(key))
        .map(|key| LoadWarning::UnknownKey {
            language: language.to_string(),
            key: key.clone(),
            suggestions: compute_suggestions(key, &known),
        })
        .collect()
}

fn is_calendar_name(key: &str) -> bool {
    let base = key.strip_suffix(SHORT_SUFFIX).unwrap_or(key);
    MONTHS.contains(&base) || WEEKDAYS.contains(&base)
}

fn is_unit(key: &str) -> bool {
    Unit::ALL.iter().any(|unit| unit.key() == key)
}

/// Month and weekday names are plain text: one template, no placeholders.
fn check_calendar_name(language: &str, entry: &PhraseDefinition) -> Result<(), LoadError> {
    let invalid = |reason: &str| LoadError::InvalidEntry {
        language: language.to_string(),
        key: entry.name.clone(),
        reason: reason.to_string(),
    };
    let PhraseBody::Simple(template) = &entry.body else {
        return Err(invalid("calendar names cannot have plural forms"));
    };
    if let Some(name) = template.placeholders().next() {
        return Err(invalid(&format!(
            "calendar names cannot contain placeholders, found ':{name}'"
        )));
    }
    Ok(())
}

fn require_placeholder(
    language: &str,
    entry: &PhraseDefinition,
    placeholder: &str,
) -> Result<(), LoadError> {
    if entry.mentions(placeholder) {
        Ok(())
    } else {
        Err(LoadError::MissingPlaceholder {
            language: language.to_string(),
            key: entry.name.clone(),
            placeholder: placeholder.to_string(),
        })
    }
}
