use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use bon::Builder;

use super::Value;
use crate::parser::Template;
use crate::table::render;

/// A template paired with the bindings it should be rendered with.
///
/// Phrases are rendered lazily, when displayed or when substituted into an
/// outer template. This lets the relative-time formatter bind a complete unit
/// phrase to `:time` without flattening it first.
///
/// # Example
///
/// ```
/// use datelingo::{Phrase, bindings};
/// use datelingo::parser::parse_template;
///
/// let inner = Phrase::builder()
///     .template(parse_template(":count minutes"))
///     .bindings(bindings! { "count" => 3 })
///     .build();
/// let outer = Phrase::builder()
///     .template(parse_template(":time ago"))
///     .bindings(bindings! { "time" => inner })
///     .build();
///
/// assert_eq!(outer.to_string(), "3 minutes ago");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Phrase {
    /// Template to render.
    template: Template,

    /// Placeholder name to value mapping.
    #[builder(default)]
    bindings: HashMap<String, Value>,
}

impl Phrase {
    /// Create a phrase from a template and its bindings.
    pub fn new(template: Template, bindings: HashMap<String, Value>) -> Self {
        Self { template, bindings }
    }

    /// The unrendered template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The bindings used when rendering.
    pub fn bindings(&self) -> &HashMap<String, Value> {
        &self.bindings
    }

    /// Render the template, recursively rendering nested phrases.
    pub fn render(&self) -> String {
        render(&self.template, &self.bindings)
    }
}

impl Display for Phrase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.render())
    }
}

impl From<Phrase> for String {
    fn from(phrase: Phrase) -> Self {
        phrase.render()
    }
}
