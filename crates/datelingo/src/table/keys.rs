//! The key catalogue every locale table is validated against.

use crate::types::Unit;

/// Month keys, January first.
pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Weekday keys, Monday first (ISO 8601 order).
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Directional wrapper keys. Each must mention `:time`.
pub const DIRECTIONAL: [&str; 4] = ["ago", "from_now", "after", "before"];

/// Suffix of the optional short-name entries (`monday_short`).
pub const SHORT_SUFFIX: &str = "_short";

/// Key of the optional short form of a calendar name.
pub fn short_key(name: &str) -> String {
    format!("{name}{SHORT_SUFFIX}")
}

/// Key of the optional direction-specific form of a unit (`minute_ago`).
pub fn unit_override_key(unit: Unit, directional: &str) -> String {
    format!("{}_{directional}", unit.key())
}

/// Key of the optional unit-specific form of a wrapper (`ago_hour`).
///
/// Used in place of the plain wrapper for that unit, so a language can
/// attach the wrapper differently to one unit.
pub fn wrapper_override_key(unit: Unit, directional: &str) -> String {
    format!("{directional}_{}", unit.key())
}

/// Every key a table must define.
pub fn required_keys() -> Vec<String> {
    MONTHS
        .iter()
        .chain(WEEKDAYS.iter())
        .chain(DIRECTIONAL.iter())
        .copied()
        .chain(Unit::ALL.iter().map(|unit| unit.key()))
        .map(ToString::to_string)
        .collect()
}

/// Every key a table may define, required or optional.
pub fn known_keys() -> Vec<String> {
    let mut keys = required_keys();
    keys.extend(MONTHS.iter().chain(WEEKDAYS.iter()).map(|name| short_key(name)));
    for unit in Unit::ALL {
        keys.extend(
            DIRECTIONAL
                .iter()
                .map(|directional| unit_override_key(unit, directional)),
        );
        keys.extend(
            DIRECTIONAL
                .iter()
                .map(|directional| wrapper_override_key(unit, directional)),
        );
    }
    keys
}

/// Returns true if `key` is a direction-specific unit override.
pub fn is_unit_override(key: &str) -> bool {
    Unit::ALL.iter().any(|unit| {
        DIRECTIONAL
            .iter()
            .any(|directional| key == unit_override_key(*unit, directional))
    })
}

/// Returns true if `key` is a unit-specific wrapper override.
pub fn is_wrapper_override(key: &str) -> bool {
    Unit::ALL.iter().any(|unit| {
        DIRECTIONAL
            .iter()
            .any(|directional| key == wrapper_override_key(*unit, directional))
    })
}
