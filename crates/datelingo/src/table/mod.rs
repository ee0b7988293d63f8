//! Locale tables: loading, validation, plural selection and rendering.

mod builtin;
mod error;
pub mod keys;
mod locale_table;
mod plural;
mod render;
mod validate;

pub use builtin::{builtin_locales, builtin_source};
pub use error::{CalendarField, FormatError, LoadError, LoadWarning, compute_suggestions};
pub use locale_table::LocaleTable;
pub use plural::{plural_category, select_form};
pub use render::{render, render_str};
