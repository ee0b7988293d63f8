//! Locale table and template parser.
//!
//! This module parses `.dtl` locale table files and the phrase templates they
//! contain. The parser produces an AST that the table loader validates and the
//! resolver evaluates.

pub mod ast;
pub mod error;
mod file;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use file::{parse_file, parse_rule};
pub use template::parse_template;
