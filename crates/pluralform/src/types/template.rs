//! Parsed format template types.
//!
//! These types are public to enable external tooling (validators, catalog
//! linters) to inspect parsed templates.

use super::ValueType;

/// A parsed format string: literal runs, typed placeholders, and
/// `%#@name@` variable references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatTemplate {
    pub segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Iterate the typed placeholders of this template, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(ph) => Some(ph),
            _ => None,
        })
    }

    /// Iterate the `%#@name@` variable references of this template, in order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

impl std::fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => write!(f, "{}", text.replace('%', "%%"))?,
                Segment::Placeholder(ph) => write!(f, "{ph}")?,
                Segment::Variable(name) => write!(f, "%#@{name}@")?,
            }
        }
        Ok(())
    }
}

/// A segment within a format template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, copied to output unchanged.
    Literal(String),
    /// A typed placeholder filled from the positional argument queue.
    Placeholder(Placeholder),
    /// A `%#@name@` reference, expanded to the named variable's selected
    /// plural form.
    Variable(String),
}

/// A typed placeholder: `%d`, `%@`, `%f`, or `%.Nf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder {
    /// The argument type this placeholder accepts.
    pub value_type: ValueType,
    /// Decimal places for float placeholders (`%.2f` -> `Some(2)`).
    pub precision: Option<usize>,
}

impl Placeholder {
    /// A placeholder with no precision.
    pub fn new(value_type: ValueType) -> Placeholder {
        Placeholder {
            value_type,
            precision: None,
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.precision {
            Some(precision) => write!(f, "%.{}{}", precision, self.value_type.specifier()),
            None => write!(f, "%{}", self.value_type.specifier()),
        }
    }
}
