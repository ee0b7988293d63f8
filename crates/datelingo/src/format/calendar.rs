//! Month and weekday names.

use std::cmp::Reverse;
use std::collections::HashMap;

use icu_casemap::CaseMapper;

use crate::table::keys::{MONTHS, WEEKDAYS, short_key};
use crate::table::{CalendarField, FormatError, LocaleTable, render};

/// Characters kept when a short name is derived from a full name.
///
/// The cut is by `char`, whatever the script.
pub const SHORT_NAME_LENGTH: usize = 3;

/// The localized name of month `index` (1 = January).
///
/// With `short`, returns the table's `{month}_short` entry, or the first
/// [`SHORT_NAME_LENGTH`] characters of the full name when the table has none.
///
/// # Example
///
/// ```
/// use datelingo::LocaleTable;
/// use datelingo::format::month_name;
///
/// let de = LocaleTable::builtin("de").unwrap();
/// assert_eq!(month_name(&de, 3, false).unwrap(), "März");
/// assert_eq!(month_name(&de, 3, true).unwrap(), "Mär");
/// assert!(month_name(&de, 13, false).is_err());
/// ```
pub fn month_name(table: &LocaleTable, index: usize, short: bool) -> Result<String, FormatError> {
    calendar_name(table, &MONTHS, CalendarField::Month, index, short)
}

/// The localized name of weekday `index` (1 = Monday, 7 = Sunday).
///
/// Short names follow the same rule as [`month_name`].
pub fn weekday_name(
    table: &LocaleTable,
    index: usize,
    short: bool,
) -> Result<String, FormatError> {
    calendar_name(table, &WEEKDAYS, CalendarField::Weekday, index, short)
}

fn calendar_name(
    table: &LocaleTable,
    keys: &[&str],
    kind: CalendarField,
    index: usize,
    short: bool,
) -> Result<String, FormatError> {
    let Some(key) = index.checked_sub(1).and_then(|i| keys.get(i)) else {
        return Err(FormatError::IndexOutOfRange {
            kind,
            index,
            max: keys.len(),
        });
    };
    if short {
        let short = short_key(key);
        if table.contains(&short) {
            return plain_text(table, &short);
        }
        let full = plain_text(table, key)?;
        return Ok(full.chars().take(SHORT_NAME_LENGTH).collect());
    }
    plain_text(table, key)
}

fn plain_text(table: &LocaleTable, key: &str) -> Result<String, FormatError> {
    Ok(render(table.select(key, 1)?, &HashMap::new()))
}

/// Replace localized month and weekday names in `text` with English ones.
///
/// The text is case folded first, so the result is lowercase. Full names are
/// replaced by the English key (`"März"` becomes `"march"`), short names by
/// its first three letters (`"Mär"` becomes `"mar"`). Longer names are
/// matched first, and matches are not required to fall on word boundaries.
///
/// ```
/// use datelingo::LocaleTable;
/// use datelingo::format::translate_time_string;
///
/// let de = LocaleTable::builtin("de").unwrap();
/// assert_eq!(
///     translate_time_string(&de, "Montag 21 März 2015").unwrap(),
///     "monday 21 march 2015"
/// );
/// ```
pub fn translate_time_string(table: &LocaleTable, text: &str) -> Result<String, FormatError> {
    let mapper = CaseMapper::new();
    let fold = |s: &str| mapper.fold_string(s).to_string();

    let mut full = Vec::new();
    let mut short: Vec<(String, String)> = Vec::new();
    let fields = [
        (CalendarField::Month, &MONTHS[..]),
        (CalendarField::Weekday, &WEEKDAYS[..]),
    ];
    for (kind, keys) in fields {
        for (i, key) in keys.iter().enumerate() {
            let index = i + 1;
            let name = calendar_name(table, keys, kind, index, false)?;
            full.push((fold(&name), key.to_string()));
            let name = calendar_name(table, keys, kind, index, true)?;
            short.push((fold(&name), key.chars().take(SHORT_NAME_LENGTH).collect()));
        }
    }
    let mut candidates: Vec<(String, String)> = full
        .into_iter()
        .chain(short)
        .filter(|(name, _)| !name.is_empty())
        .collect();
    candidates.sort_by_key(|(name, _)| Reverse(name.chars().count()));

    let folded = fold(text);
    let mut out = String::with_capacity(folded.len());
    let mut rest = folded.as_str();
    while let Some(c) = rest.chars().next() {
        let matched = candidates
            .iter()
            .find(|(name, _)| rest.starts_with(name.as_str()));
        if let Some((name, english)) = matched {
            out.push_str(english);
            rest = &rest[name.len()..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    Ok(out)
}
