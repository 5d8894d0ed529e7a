//! Catalog document parser.
//!
//! Parses per-locale catalog documents containing message definitions:
//!
//! ```text
//! // comments run to end of line
//! greeting_message = "Hello, world!";
//! numberOfSongs = "%#@count@" {
//!     count(d) { one: "You have 1 song.", other: "You have %d songs." }
//! };
//! numberOfItems = "%#@count@" (%d, %@) {
//!     count(d) { other: "You have %d items, total %@." }
//! };
//! ```
//!
//! Each entry is a key, a quoted format string, an optional declared
//! specifier list, an optional `cardinal`/`ordinal` keyword, and an optional
//! block of counting variables with their per-category forms.

use std::collections::BTreeMap;

use winnow::combinator::{alt, delimited, opt, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::calculate_position;
use super::error::ParseError;
use super::template::{
    merge_literals, percent_escape, placeholder, placeholder_segment, specifier_message,
    variable_ref,
};
use crate::types::{
    FormatTemplate, MessageDefinition, Placeholder, PluralCategory, PluralVariable, RuleType,
    Segment, ValueType,
};

/// Parse an entire catalog document into message definitions.
pub fn parse_document(input: &str) -> Result<Vec<MessageDefinition>, ParseError> {
    let mut remaining = input;
    match document(&mut remaining) {
        Ok(definitions) => {
            // Skip any trailing whitespace/comments
            let _ = skip_ws_and_comments(&mut remaining);
            if remaining.is_empty() {
                Ok(definitions)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: specifier_message(remaining),
                })
            }
        }
        Err(_) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: specifier_message(remaining),
                })
            }
        }
    }
}

/// Parse an entire document into message definitions.
fn document(input: &mut &str) -> ModalResult<Vec<MessageDefinition>> {
    skip_ws_and_comments(input)?;
    let definitions: Vec<MessageDefinition> =
        repeat(0.., terminated(entry, skip_ws_and_comments)).parse_next(input)?;
    Ok(definitions)
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse one entry: key = "format" specifiers? ruletype? variables? ;
fn entry(input: &mut &str) -> ModalResult<MessageDefinition> {
    let key = key_identifier(input)?;
    skip_ws_and_comments(input)?;

    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;

    let format_key = format_string(input)?;
    skip_ws_and_comments(input)?;

    // Optional declared specifier list: (%d, %@)
    let specifiers: Vec<Placeholder> = opt(specifier_list).parse_next(input)?.unwrap_or_default();
    skip_ws_and_comments(input)?;

    // Optional rule type keyword
    let rule_type: RuleType = opt(rule_type_keyword).parse_next(input)?.unwrap_or_default();
    skip_ws_and_comments(input)?;

    // Optional variable block
    let variables = opt(variable_block).parse_next(input)?.unwrap_or_default();
    skip_ws_and_comments(input)?;

    ';'.parse_next(input)?;

    Ok(MessageDefinition {
        key,
        format_key,
        specifiers,
        rule_type,
        variables,
    })
}

/// Parse a message key (alphabetic or underscore start, then alphanumeric
/// and underscores).
fn key_identifier(input: &mut &str) -> ModalResult<String> {
    let ident: &str =
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)?;

    let starts_ok = ident
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !starts_ok {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    Ok(ident.to_string())
}

/// Parse a declared specifier list: (%d, %@)
fn specifier_list(input: &mut &str) -> ModalResult<Vec<Placeholder>> {
    delimited(
        '(',
        separated(
            1..,
            preceded(skip_ws_and_comments, placeholder),
            (skip_ws_and_comments, ',', skip_ws_and_comments),
        ),
        preceded(skip_ws_and_comments, ')'),
    )
    .parse_next(input)
}

/// Parse the `cardinal` or `ordinal` keyword.
fn rule_type_keyword(input: &mut &str) -> ModalResult<RuleType> {
    alt((
        "cardinal".value(RuleType::Cardinal),
        "ordinal".value(RuleType::Ordinal),
    ))
    .parse_next(input)
}

/// Parse a variable block: { name(d) { one: "...", other: "..." } ... }
fn variable_block(input: &mut &str) -> ModalResult<BTreeMap<String, PluralVariable>> {
    let pairs: Vec<(String, PluralVariable)> = delimited(
        ('{', skip_ws_and_comments),
        repeat(1.., terminated(variable_def, skip_ws_and_comments)),
        '}',
    )
    .parse_next(input)?;

    collect_unique(pairs).ok_or_else(|| ErrMode::Cut(ContextError::new()))
}

/// Parse one variable definition: name(d) { forms }
fn variable_def(input: &mut &str) -> ModalResult<(String, PluralVariable)> {
    let name = key_identifier(input)?;
    let value_type = delimited('(', value_type_letter, ')').parse_next(input)?;
    skip_ws_and_comments(input)?;

    let forms = delimited(
        ('{', skip_ws_and_comments),
        form_entries,
        (skip_ws_and_comments, '}'),
    )
    .parse_next(input)?;

    Ok((name, PluralVariable { value_type, forms }))
}

/// Parse a value type letter: d, f, or @.
fn value_type_letter(input: &mut &str) -> ModalResult<ValueType> {
    one_of(['d', 'f', '@'])
        .map(|c: char| ValueType::from_specifier(c).unwrap_or(ValueType::Integer))
        .parse_next(input)
}

/// Parse form entries with trailing comma support.
fn form_entries(input: &mut &str) -> ModalResult<BTreeMap<PluralCategory, FormatTemplate>> {
    let entries: Vec<(PluralCategory, FormatTemplate)> = separated(
        1..,
        form_entry,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)?;

    // Allow trailing comma
    let _ = opt((skip_ws_and_comments, ',')).parse_next(input)?;

    collect_unique(entries).ok_or_else(|| ErrMode::Cut(ContextError::new()))
}

/// Parse a single form entry: category: "template"
fn form_entry(input: &mut &str) -> ModalResult<(PluralCategory, FormatTemplate)> {
    let name = key_identifier(input)?;
    let Some(category) = PluralCategory::from_name(&name) else {
        return Err(ErrMode::Backtrack(ContextError::new()));
    };
    skip_ws_and_comments(input)?;
    ':'.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let template = format_string(input)?;

    Ok((category, template))
}

/// Parse a quoted format string: "content"
fn format_string(input: &mut &str) -> ModalResult<FormatTemplate> {
    delimited('"', quoted_template, '"').parse_next(input)
}

/// Parse the content of a quoted format string.
fn quoted_template(input: &mut &str) -> ModalResult<FormatTemplate> {
    let segments: Vec<Segment> = repeat(0.., quoted_segment).parse_next(input)?;
    Ok(FormatTemplate {
        segments: merge_literals(segments),
    })
}

/// Parse a single segment inside a quoted string.
fn quoted_segment(input: &mut &str) -> ModalResult<Segment> {
    alt((
        percent_escape,
        variable_ref,
        placeholder_segment,
        quoted_literal_char,
    ))
    .parse_next(input)
}

/// Parse a literal character inside a quoted string (not `%` or `"`).
fn quoted_literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['%', '"'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Build a map from pairs, returning None on a duplicate key.
fn collect_unique<K: Ord, V>(pairs: Vec<(K, V)>) -> Option<BTreeMap<K, V>> {
    let mut map = BTreeMap::new();
    for (key, value) in pairs {
        if map.contains_key(&key) {
            return None;
        }
        map.insert(key, value);
    }
    Some(map)
}
