//! Process-wide cache of built-in locale tables.
//!
//! Each built-in table is parsed and validated at most once per process and
//! then shared. Readers never see a partially built table: a table is
//! inserted only after it validated, and a concurrent loader that loses the
//! race adopts the table that won.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use log::{debug, warn};

use crate::table::{LoadError, LocaleTable};

static TABLES: LazyLock<RwLock<BTreeMap<String, Arc<LocaleTable>>>> =
    LazyLock::new(|| RwLock::new(BTreeMap::new()));

/// Returns the shared table for a built-in locale, loading it on first use.
///
/// # Example
///
/// ```
/// let first = datelingo::load_table("hu").unwrap();
/// let second = datelingo::load_table("hu").unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// assert!(datelingo::load_table("xx").is_err());
/// ```
pub fn load_table(code: &str) -> Result<Arc<LocaleTable>, LoadError> {
    if let Some(table) = cached(code) {
        debug!("locale table '{code}' served from cache");
        return Ok(table);
    }

    let table = LocaleTable::builtin(code)?;
    for warning in table.lint() {
        warn!("{warning}");
    }

    let mut tables = TABLES.write().unwrap_or_else(PoisonError::into_inner);
    let shared = tables
        .entry(code.to_string())
        .or_insert_with(|| {
            debug!("loaded locale table '{code}' with {} entries", table.len());
            Arc::new(table)
        })
        .clone();
    Ok(shared)
}

/// Returns true if the table for `code` is already cached.
pub fn is_loaded(code: &str) -> bool {
    cached(code).is_some()
}

/// Codes of the cached tables, sorted.
pub fn loaded_locales() -> Vec<String> {
    TABLES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .cloned()
        .collect()
}

fn cached(code: &str) -> Option<Arc<LocaleTable>> {
    TABLES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(code)
        .cloned()
}
