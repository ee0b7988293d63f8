//! Locale table file format parser.
//!
//! Parses `.dtl` files containing keyed entries:
//!
//! ```text
//! // comment
//! january = "January";
//! ago = ":time ago";
//! year = { 1: "1 year", other: ":count years" };
//! hour = { one: ":count час", few: ":count часа", [5, 20]: ":count часов", other: ":count часа" };
//! ```

use super::ast::*;
use super::error::ParseError;
use super::template::parse_template;
use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

/// Parse an entire .dtl file into entry definitions.
pub fn parse_file(input: &str) -> Result<Vec<PhraseDefinition>, ParseError> {
    let mut remaining = input;
    match file(&mut remaining) {
        Ok(entries) => {
            // Skip any trailing whitespace/comments
            let _ = skip_ws_and_comments(&mut remaining);
            if remaining.is_empty() {
                Ok(entries)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Parse a single plural rule key such as `1`, `[2, 4]`, `few` or `other`.
///
/// Used by loaders whose container format stores one rule per string.
pub fn parse_rule(input: &str) -> Result<RuleCondition, ParseError> {
    let mut remaining = input.trim();
    match rule_key(&mut remaining) {
        Ok(rule) if remaining.is_empty() => Ok(rule),
        _ => Err(ParseError::InvalidRule {
            rule: input.to_string(),
        }),
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse an entire file into entry definitions.
fn file(input: &mut &str) -> ModalResult<Vec<PhraseDefinition>> {
    skip_ws_and_comments(input)?;
    let entries: Vec<PhraseDefinition> =
        repeat(0.., terminated(entry_definition, skip_ws_and_comments)).parse_next(input)?;
    Ok(entries)
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse an entry definition: key = body ;
///
/// Once the `=` is consumed the rest of the definition is committed, so
/// errors point into the malformed body instead of at the key.
fn entry_definition(input: &mut &str) -> ModalResult<PhraseDefinition> {
    let name = snake_case_identifier(input)?;
    skip_ws_and_comments(input)?;

    '='.parse_next(input)?;

    let body = cut_err(preceded(skip_ws_and_comments, entry_body)).parse_next(input)?;
    cut_err(preceded(skip_ws_and_comments, ';')).parse_next(input)?;

    Ok(PhraseDefinition { name, body })
}

/// Parse a snake_case identifier (lowercase start, alphanumeric + underscore).
fn snake_case_identifier(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .verify(|ident: &&str| ident.starts_with(|c: char| c.is_ascii_lowercase()))
        .map(|ident: &str| ident.to_string())
        .parse_next(input)
}

/// Parse an entry body: plural block or single template.
fn entry_body(input: &mut &str) -> ModalResult<PhraseBody> {
    alt((
        plural_block.map(PhraseBody::Plural),
        string_literal.map(|text| PhraseBody::Simple(parse_template(&text))),
    ))
    .parse_next(input)
}

/// Parse a plural block: { rule: "template", ... }
fn plural_block(input: &mut &str) -> ModalResult<Vec<PluralForm>> {
    delimited(
        ('{', skip_ws_and_comments),
        plural_forms,
        (skip_ws_and_comments, '}'),
    )
    .parse_next(input)
}

/// Parse plural forms with trailing comma support.
fn plural_forms(input: &mut &str) -> ModalResult<Vec<PluralForm>> {
    let forms: Vec<PluralForm> = separated(
        1..,
        plural_form,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)?;

    // Allow trailing comma
    let _ = opt((skip_ws_and_comments, ',')).parse_next(input)?;

    Ok(forms)
}

/// Parse a single plural form: rule1, rule2: "template"
fn plural_form(input: &mut &str) -> ModalResult<PluralForm> {
    let conditions: Vec<RuleCondition> = separated(
        1..,
        rule_key,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)?;
    skip_ws_and_comments(input)?;
    ':'.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let text = string_literal(input)?;

    Ok(PluralForm {
        conditions,
        template: parse_template(&text),
    })
}

/// Parse a rule key: interval, exact count or category name.
fn rule_key(input: &mut &str) -> ModalResult<RuleCondition> {
    alt((interval, integer.map(RuleCondition::Exact), category)).parse_next(input)
}

/// Parse an inclusive interval: [start, end] or [start, *]
fn interval(input: &mut &str) -> ModalResult<RuleCondition> {
    '['.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let start = integer(input)?;
    skip_ws_and_comments(input)?;
    ','.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let end = alt((integer.map(Some), '*'.value(None))).parse_next(input)?;
    skip_ws_and_comments(input)?;
    ']'.parse_next(input)?;

    if end.is_some_and(|end| end < start) {
        return Err(ErrMode::Cut(ContextError::new()));
    }
    Ok(RuleCondition::Interval { start, end })
}

/// Parse a non-negative integer.
fn integer(input: &mut &str) -> ModalResult<u64> {
    digit1
        .try_map(|digits: &str| digits.parse::<u64>())
        .parse_next(input)
}

/// Parse a CLDR category name; `other` is the default rule.
fn category(input: &mut &str) -> ModalResult<RuleCondition> {
    let word = take_while(1.., |c: char| c.is_ascii_lowercase()).parse_next(input)?;
    match word {
        "other" => Ok(RuleCondition::Default),
        "zero" | "one" | "two" | "few" | "many" => Ok(RuleCondition::Category(word.to_string())),
        _ => Err(ErrMode::Backtrack(ContextError::new())),
    }
}

/// Parse a quoted string: "content", with \" \\ and \n escapes.
fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let chars: Vec<char> = repeat(0.., string_char).parse_next(input)?;
    '"'.parse_next(input)?;
    Ok(chars.into_iter().collect())
}

/// Parse one (possibly escaped) character inside a quoted string.
fn string_char(input: &mut &str) -> ModalResult<char> {
    alt((
        preceded('\\', alt(('"', '\\', 'n'.value('\n')))),
        none_of(['"', '\\']),
    ))
    .parse_next(input)
}
