//! Placeholder substitution.

use std::collections::HashMap;

use crate::parser::{Segment, Template, parse_template};
use crate::types::Value;

/// Render a template, substituting each bound placeholder.
///
/// Substitution works on the parsed segments, so `:count` never touches a
/// longer placeholder like `:counter`. Placeholders without a binding are
/// written back unchanged, and nested phrases are rendered recursively.
pub fn render(template: &Template, bindings: &HashMap<String, Value>) -> String {
    let mut out = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => match bindings.get(name) {
                Some(value) => out.push_str(&value.to_string()),
                None => {
                    out.push(':');
                    out.push_str(name);
                }
            },
        }
    }
    out
}

/// Parse `source` as a template and render it.
///
/// ```
/// use datelingo::bindings;
/// use datelingo::table::render_str;
///
/// assert_eq!(render_str(":count napja", &bindings! { "count" => 5 }), "5 napja");
/// assert_eq!(render_str(":count :unit", &bindings! { "count" => 5 }), "5 :unit");
/// ```
pub fn render_str(source: &str, bindings: &HashMap<String, Value>) -> String {
    render(&parse_template(source), bindings)
}
