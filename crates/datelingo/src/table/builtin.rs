//! Locale tables compiled into the crate.

use crate::table::error::{LoadError, compute_suggestions};
use crate::table::locale_table::LocaleTable;

const BUILTIN: &[(&str, &str)] = &[
    ("de", include_str!("../../locales/de.dtl")),
    ("en", include_str!("../../locales/en.dtl")),
    ("hu", include_str!("../../locales/hu.dtl")),
    ("ja", include_str!("../../locales/ja.dtl")),
    ("ru", include_str!("../../locales/ru.dtl")),
];

/// Codes of every built-in locale, sorted.
pub fn builtin_locales() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(code, _)| *code)
}

/// The `.dtl` source of a built-in locale.
pub fn builtin_source(code: &str) -> Option<&'static str> {
    BUILTIN
        .iter()
        .find(|(builtin, _)| *builtin == code)
        .map(|(_, source)| *source)
}

impl LocaleTable {
    /// Parse a built-in table, bypassing the shared cache.
    ///
    /// Most callers want [`load_table`](crate::load_table), which parses each
    /// table once per process.
    pub fn builtin(code: &str) -> Result<Self, LoadError> {
        let source = builtin_source(code).ok_or_else(|| {
            let available: Vec<String> = builtin_locales().map(ToString::to_string).collect();
            LoadError::UnknownLocale {
                code: code.to_string(),
                suggestions: compute_suggestions(code, &available),
            }
        })?;
        Self::parse(code, source)
    }
}
