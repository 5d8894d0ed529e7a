//! Format string parser using winnow.
//!
//! Parses printf-style format strings into a [`FormatTemplate`]. Handles:
//! - Literal text runs
//! - Typed placeholders: `%d`, `%@`, `%f`, `%.Nf`
//! - Counting variable references: `%#@name@`
//! - The `%%` escape

use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::calculate_position;
use super::error::ParseError;
use crate::types::{FormatTemplate, Placeholder, Segment, ValueType};

/// Parse a bare format string into a template.
///
/// # Example
///
/// ```
/// use pluralform::parse_format;
///
/// let template = parse_format("You have %d items, total %@.").unwrap();
/// assert_eq!(template.placeholders().count(), 2);
/// ```
pub fn parse_format(input: &str) -> Result<FormatTemplate, ParseError> {
    let mut remaining = input;
    match format_template(&mut remaining) {
        Ok(template) if remaining.is_empty() => Ok(template),
        Ok(_) | Err(_) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: specifier_message(remaining),
            })
        }
    }
}

/// Describe the character the parser stopped at.
pub(super) fn specifier_message(remaining: &str) -> String {
    let mut chars = remaining.chars();
    match chars.next() {
        Some('%') => match chars.next() {
            Some(c) => format!("unknown format specifier '%{c}'"),
            None => "incomplete format specifier '%'".to_string(),
        },
        Some(c) => format!("unexpected character: '{c}'"),
        None => "unexpected end of input".to_string(),
    }
}

/// Parse a complete format string into segments.
fn format_template(input: &mut &str) -> ModalResult<FormatTemplate> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(FormatTemplate {
        segments: merge_literals(segments),
    })
}

/// Parse a single segment of a bare format string.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((percent_escape, variable_ref, placeholder_segment, literal_run)).parse_next(input)
}

/// Parse the `%%` escape.
pub(super) fn percent_escape(input: &mut &str) -> ModalResult<Segment> {
    "%%".value(Segment::Literal("%".to_string())).parse_next(input)
}

/// Parse a variable reference: `%#@name@`.
pub(super) fn variable_ref(input: &mut &str) -> ModalResult<Segment> {
    delimited(
        "%#@",
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
        '@',
    )
    .map(|name: &str| Segment::Variable(name.to_string()))
    .parse_next(input)
}

/// Parse a placeholder segment.
pub(super) fn placeholder_segment(input: &mut &str) -> ModalResult<Segment> {
    placeholder.map(Segment::Placeholder).parse_next(input)
}

/// Parse a typed placeholder: `%d`, `%@`, `%f`, or `%.Nf`.
///
/// Also used by the document parser for declared specifier lists.
pub(super) fn placeholder(input: &mut &str) -> ModalResult<Placeholder> {
    preceded(
        '%',
        alt((
            'd'.value(Placeholder::new(ValueType::Integer)),
            '@'.value(Placeholder::new(ValueType::Str)),
            'f'.value(Placeholder::new(ValueType::Float)),
            float_with_precision,
        )),
    )
    .parse_next(input)
}

/// Parse the precision form `.Nf` (after the `%`).
fn float_with_precision(input: &mut &str) -> ModalResult<Placeholder> {
    delimited('.', take_while(1.., |c: char| c.is_ascii_digit()), 'f')
        .parse_to::<usize>()
        .map(|precision| Placeholder {
            value_type: ValueType::Float,
            precision: Some(precision),
        })
        .parse_next(input)
}

/// Parse a run of literal characters (anything but `%`).
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    none_of(['%'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Merge adjacent Literal segments into single segments.
pub(super) fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
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
            other => result.push(other),
        }
    }

    result
}
