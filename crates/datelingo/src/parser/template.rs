//! Template string parser using winnow.
//!
//! Splits a template into literal text and `:name` placeholders. A colon that
//! is not followed by an identifier (e.g. `"10:30"` or a trailing `:`) stays
//! literal text, so every input string is a valid template.

use super::ast::*;
use winnow::combinator::{alt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        _ => Template::literal(input),
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Parse a single segment (placeholder or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse a placeholder: `:identifier`.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    preceded(':', take_while(1.., is_ident_cont))
        .verify(|name: &&str| name.starts_with(is_ident_start))
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

/// Parse a single literal character.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Check if a character can start a placeholder name.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue a placeholder name.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder(_) => result.push(other),
        }
    }

    result
}
