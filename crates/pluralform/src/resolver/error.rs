//! Error types for catalog loading, validation, and resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{PluralCategory, ValueType};

/// Errors that occur during catalog loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog document.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The same key was defined twice in one document.
    #[error("duplicate key '{key}' in locale '{locale}'")]
    Duplicate { locale: String, key: String },

    /// Attempted to reload a locale that was loaded from a string.
    #[error("cannot reload '{locale}': was loaded from string, not file")]
    NoPathForReload { locale: String },
}

/// An error that occurred while resolving a message.
///
/// None of these are recovered silently: a missing key or a mistyped
/// argument produces an error value rather than raw key text or corrupted
/// output that would hide the bug.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Key absent from both the requested and the default locale.
    #[error("unknown key '{key}' for locale '{locale}'{}", format_suggestions(suggestions))]
    UnknownKey {
        key: String,
        locale: String,
        suggestions: Vec<String>,
    },

    /// The selected category is absent and the rule set has no `other`
    /// fallback. Indicates a malformed catalog; validation reports this
    /// before deployment.
    #[error("no 'other' fallback for category '{category}' of key '{key}' in locale '{locale}'")]
    MissingFallbackCategory {
        key: String,
        locale: String,
        category: PluralCategory,
    },

    /// A supplied argument does not match the placeholder's declared type.
    #[error("type mismatch at argument {index} of '{key}': expected {expected}, got {got}")]
    TypeMismatch {
        key: String,
        index: usize,
        expected: ValueType,
        got: ValueType,
    },

    /// Fewer arguments were supplied than the template has placeholders.
    #[error("missing argument {index} of '{key}'")]
    MissingArgument { key: String, index: usize },

    /// The format key references a variable with no definition.
    #[error("format key of '{key}' references undefined variable '{variable}'")]
    UndefinedVariable { key: String, variable: String },

    /// Nested variable references exceeded the expansion depth limit.
    #[error("recursion limit exceeded expanding '{key}'")]
    RecursionLimit { key: String },
}

/// A non-fatal problem found by catalog validation.
///
/// A catalog with no warnings is guaranteed never to fail with
/// [`ResolveError::MissingFallbackCategory`], [`ResolveError::UndefinedVariable`],
/// or [`ResolveError::RecursionLimit`] at call time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogWarning {
    /// A variable's rule set has no `other` form.
    #[error("variable '{variable}' of key '{key}' in locale '{locale}' has no 'other' form")]
    MissingFallback {
        locale: String,
        key: String,
        variable: String,
    },

    /// A template references a variable the entry does not define.
    #[error("key '{key}' in locale '{locale}' references undefined variable '{variable}'")]
    UndefinedVariable {
        locale: String,
        key: String,
        variable: String,
    },

    /// A defined variable is never referenced by any template.
    #[error("variable '{variable}' of key '{key}' in locale '{locale}' is never referenced")]
    UnusedVariable {
        locale: String,
        key: String,
        variable: String,
    },

    /// Declared specifier list disagrees with the placeholders the
    /// templates actually contain.
    #[error(
        "key '{key}' in locale '{locale}' declares specifiers ({declared}) but templates use ({found})"
    )]
    SpecifierMismatch {
        locale: String,
        key: String,
        declared: String,
        found: String,
    },

    /// A key exists in a locale but not in the default locale.
    #[error("key '{key}' in locale '{locale}' is missing from default locale '{default_locale}'")]
    MissingFromDefault {
        locale: String,
        key: String,
        default_locale: String,
    },

    /// Variables reference each other in a cycle.
    #[error("variables of key '{key}' in locale '{locale}' reference each other cyclically")]
    CyclicVariables { locale: String, key: String },
}

/// Render a suggestion list for error display.
fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Compute typo suggestions for a key against the available keys.
///
/// - distance <= 1 for keys <= 3 chars
/// - distance <= 2 for longer keys
/// - Limited to 3 suggestions, sorted by distance
pub fn compute_suggestions<'a>(
    key: &str,
    available: impl Iterator<Item = &'a String>,
) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .filter_map(|candidate| {
            let dist = strsim::levenshtein(key, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
