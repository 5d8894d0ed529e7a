//! Catalog document and format string parsers.
//!
//! This module provides parsing for per-locale catalog documents and the
//! printf-style format strings they contain. The parsers produce the types
//! in [`crate::types`], which can also be used by external tooling.

pub mod error;

mod document;
mod template;

pub use document::parse_document;
pub use error::ParseError;
pub use template::parse_format;

/// Calculate line and column from original input and remaining input.
pub(crate) fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
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
