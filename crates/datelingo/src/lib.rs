pub mod format;
mod global;
pub mod parser;
pub mod table;
pub mod types;

pub use format::{LocalizedDate, RelativeDescriptor, describe_relative};
pub use global::{is_loaded, load_table, loaded_locales};
pub use table::{FormatError, LoadError, LoadWarning, LocaleTable, compute_suggestions};
pub use types::{Comparison, Direction, Phrase, Unit, Value};

/// Creates a `HashMap<String, Value>` of template bindings.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, strings, or `Phrase` values directly.
///
/// # Example
///
/// ```
/// use datelingo::{bindings, Value};
///
/// let b = bindings! { "count" => 3, "time" => "5 days" };
/// assert_eq!(b.len(), 2);
/// assert_eq!(b["count"].as_number(), Some(3));
/// assert_eq!(b["time"].as_string(), Some("5 days"));
/// ```
#[macro_export]
macro_rules! bindings {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
