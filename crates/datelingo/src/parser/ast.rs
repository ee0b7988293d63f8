//! Public AST types for locale tables and phrase templates.
//!
//! These types are public to enable external tooling (table linters,
//! coverage reports) that inspects a table without formatting anything.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied verbatim.
    Literal(String),
    /// A named placeholder such as `:count` (stored without the colon).
    Placeholder(String),
}

impl Template {
    /// Creates a template consisting of a single literal segment.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Literal(text.into())],
        }
    }

    /// Names of the placeholders in this template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Returns true if the template contains `:name`.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders().any(|p| p == name)
    }
}

impl Display for Template {
    /// Writes the template back in source form.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => write!(f, "{text}")?,
                Segment::Placeholder(name) => write!(f, ":{name}")?,
            }
        }
        Ok(())
    }
}

/// The condition under which a plural form applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCondition {
    /// Matches exactly this count: `1`.
    Exact(u64),
    /// Matches an inclusive range, `end: None` is unbounded: `[2, 4]`, `[5, *]`.
    Interval { start: u64, end: Option<u64> },
    /// Matches a CLDR cardinal category of the table's language: `few`.
    Category(String),
    /// Matches anything. Written `other`.
    Default,
}

impl RuleCondition {
    /// Returns true for conditions that only look at the count itself.
    pub fn matches_count(&self, count: u64) -> bool {
        match self {
            RuleCondition::Exact(n) => *n == count,
            RuleCondition::Interval { start, end } => {
                count >= *start && end.is_none_or(|end| count <= end)
            }
            RuleCondition::Category(_) | RuleCondition::Default => false,
        }
    }
}

impl Display for RuleCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RuleCondition::Exact(n) => write!(f, "{n}"),
            RuleCondition::Interval { start, end: Some(end) } => write!(f, "[{start}, {end}]"),
            RuleCondition::Interval { start, end: None } => write!(f, "[{start}, *]"),
            RuleCondition::Category(name) => write!(f, "{name}"),
            RuleCondition::Default => write!(f, "other"),
        }
    }
}

/// One plural form: one or more conditions sharing a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForm {
    pub conditions: Vec<RuleCondition>,
    pub template: Template,
}

/// The body of an entry: a single template or an ordered list of plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseBody {
    /// A single template, used for every count.
    Simple(Template),
    /// Plural forms, evaluated against a magnitude.
    Plural(Vec<PluralForm>),
}

/// A keyed entry of a locale table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseDefinition {
    /// Semantic key (e.g. "january", "ago", "minute_ago").
    pub name: String,
    /// Entry body.
    pub body: PhraseBody,
}

impl PhraseDefinition {
    /// All templates of this entry in declaration order.
    pub fn templates(&self) -> Vec<&Template> {
        match &self.body {
            PhraseBody::Simple(template) => vec![template],
            PhraseBody::Plural(forms) => forms.iter().map(|form| &form.template).collect(),
        }
    }

    /// Returns true if any template of this entry contains `:name`.
    pub fn mentions(&self, placeholder: &str) -> bool {
        self.templates()
            .iter()
            .any(|template| template.has_placeholder(placeholder))
    }

    /// Returns true if the entry can never fail form selection.
    pub fn has_default_rule(&self) -> bool {
        match &self.body {
            PhraseBody::Simple(_) => true,
            PhraseBody::Plural(forms) => forms
                .iter()
                .any(|form| form.conditions.contains(&RuleCondition::Default)),
        }
    }
}
