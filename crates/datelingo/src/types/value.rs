use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Phrase;

/// A runtime value bound to a template placeholder.
///
/// Numbers, strings and nested phrases can be bound interchangeably. A nested
/// phrase is rendered on substitution, which is how a unit phrase ("5 days")
/// ends up inside a directional template (":time ago").
///
/// # Example
///
/// ```
/// use datelingo::{Phrase, Value};
/// use datelingo::parser::parse_template;
///
/// // Numbers become Value::Number
/// let count: Value = 5u64.into();
///
/// // Strings become Value::String
/// let name: Value = "Monday".into();
///
/// // Phrases become Value::Phrase
/// let days: Value = Phrase::builder()
///     .template(parse_template(":count days"))
///     .bindings(datelingo::bindings! { "count" => 5 })
///     .build()
///     .into();
/// assert_eq!(days.to_string(), "5 days");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// An integer number (used for `:count`).
    ///
    /// Wide enough to hold every `i64` and `u64` without loss.
    Number(i128),

    /// A string value, substituted verbatim.
    String(String),

    /// A phrase value, rendered recursively.
    Phrase(Phrase),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i128> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a phrase, if it is one.
    pub fn as_phrase(&self) -> Option<&Phrase> {
        match self {
            Value::Phrase(p) => Some(p),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Phrase(p) => write!(f, "{p}"),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i128::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(i128::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i128::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(i128::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Value::Number(n as i128)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Phrase> for Value {
    fn from(p: Phrase) -> Self {
        Value::Phrase(p)
    }
}
