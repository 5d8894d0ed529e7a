use std::collections::BTreeMap;

use super::{FormatTemplate, Placeholder, PluralCategory, RuleType, ValueType};

/// Plural forms for one counting variable, keyed by CLDR category.
///
/// The `other` form is the mandatory fallback; all other categories are
/// optional per locale. A catalog that omits `other` is malformed, which
/// [`crate::MessageCatalog::validate`] reports before any call fails.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralVariable {
    /// Declared type of the counting value.
    pub value_type: ValueType,
    /// Category to template mapping.
    pub forms: BTreeMap<PluralCategory, FormatTemplate>,
}

impl PluralVariable {
    /// Select the form for a category, falling back to `other`.
    pub fn form(&self, category: PluralCategory) -> Option<&FormatTemplate> {
        self.forms
            .get(&category)
            .or_else(|| self.forms.get(&PluralCategory::Other))
    }

    /// Whether the mandatory `other` fallback is present.
    pub fn has_fallback(&self) -> bool {
        self.forms.contains_key(&PluralCategory::Other)
    }
}

/// One catalog entry: a format key plus its plural variables.
///
/// Entries without variables are plain messages; their format key may still
/// contain placeholders (`"The currency is %@."`) or be pure literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDefinition {
    /// The lookup key.
    pub key: String,
    /// The top-level format template. `%#@name@` segments expand to the
    /// selected form of the named variable.
    pub format_key: FormatTemplate,
    /// Optional declared specifier list, checked against the templates by
    /// catalog validation.
    pub specifiers: Vec<Placeholder>,
    /// Cardinal or ordinal category selection.
    pub rule_type: RuleType,
    /// Counting variables referenced by the format key.
    pub variables: BTreeMap<String, PluralVariable>,
}
