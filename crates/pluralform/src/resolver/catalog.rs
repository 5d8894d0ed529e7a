//! Message catalog: loading, validation, and resolution.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;

use crate::parser::{ParseError, parse_document};
use crate::resolver::error::{CatalogWarning, LoadError, ResolveError, compute_suggestions};
use crate::resolver::plural::is_supported_language;
use crate::resolver::registry::MessageRegistry;
use crate::resolver::render::render;
use crate::types::{
    FormatTemplate, MessageDefinition, Placeholder, PluralCategory, Quantity, Segment, Value,
};

/// An immutable-after-load catalog of localized plural messages.
///
/// The catalog owns one message registry per locale plus a configured
/// default locale. It is constructed explicitly and passed by reference;
/// there is no process-wide singleton. After loading, every operation takes
/// `&self`, so a shared catalog can be resolved from multiple threads
/// without coordination.
///
/// Missing keys are errors, not silently papered over with raw key text.
///
/// # Example
///
/// ```
/// use pluralform::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new();
/// catalog
///     .load_messages_str(
///         "en",
///         r#"
///         numberOfSongs = "%#@count@" {
///             count(d) { one: "You have 1 song.", other: "You have %d songs." }
///         };
///     "#,
///     )
///     .unwrap();
///
/// let one = catalog.resolve("numberOfSongs", "en", 1, &[]).unwrap();
/// assert_eq!(one, "You have 1 song.");
///
/// let five = catalog.resolve("numberOfSongs", "en", 5, &[]).unwrap();
/// assert_eq!(five, "You have 5 songs.");
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct MessageCatalog {
    /// Fallback locale consulted when a key is missing for the requested
    /// locale (default "en").
    #[builder(default = "en".to_string())]
    default_locale: String,

    /// Per-locale message registries.
    #[builder(skip)]
    locales: BTreeMap<String, MessageRegistry>,

    /// File paths for hot-reload support: locale -> PathBuf.
    /// Only populated for file-loaded documents, not string-loaded.
    #[builder(skip)]
    loaded_paths: BTreeMap<String, PathBuf>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        MessageCatalog::builder().build()
    }
}

impl MessageCatalog {
    /// Create a new catalog with the default locale "en".
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new catalog with the specified default locale.
    pub fn with_default_locale(locale: impl Into<String>) -> Self {
        MessageCatalog::builder().default_locale(locale.into()).build()
    }

    /// Get the configured default locale.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Iterate the loaded locales in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Number of messages loaded for a locale.
    pub fn message_count(&self, locale: &str) -> usize {
        self.locales.get(locale).map_or(0, MessageRegistry::len)
    }

    /// Whether a key is defined directly for a locale (no fallback).
    pub fn contains(&self, locale: &str, key: &str) -> bool {
        self.locales
            .get(locale)
            .is_some_and(|registry| registry.get(key).is_some())
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load a catalog document from a file for a specific locale.
    ///
    /// The file path is stored for later [`MessageCatalog::reload_messages`]
    /// support. Loading the same locale twice **replaces** all previous
    /// messages for that locale.
    pub fn load_messages(
        &mut self,
        locale: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Replace semantics
        self.locales.remove(locale);

        let count = self.load_str_internal(locale, &content, Some(path))?;

        self.loaded_paths
            .insert(locale.to_string(), path.to_path_buf());

        Ok(count)
    }

    /// Load a catalog document from a string for a specific locale.
    ///
    /// Documents loaded this way cannot be reloaded via
    /// [`MessageCatalog::reload_messages`]. Loading the same locale twice
    /// **replaces** all previous messages for that locale.
    pub fn load_messages_str(&mut self, locale: &str, content: &str) -> Result<usize, LoadError> {
        // String-loaded, so drop any stored reload path
        self.loaded_paths.remove(locale);

        // Replace semantics
        self.locales.remove(locale);

        self.load_str_internal(locale, content, None)
    }

    /// Hot-reload a locale's document from the original file path.
    ///
    /// Returns an error if the document was loaded from a string rather
    /// than a file. Callers should hold no references across the reload;
    /// in-flight resolutions on other threads require an external
    /// copy-on-write swap of the whole catalog.
    pub fn reload_messages(&mut self, locale: &str) -> Result<usize, LoadError> {
        let path = self
            .loaded_paths
            .get(locale)
            .cloned()
            .ok_or_else(|| LoadError::NoPathForReload {
                locale: locale.to_string(),
            })?;

        self.load_messages(locale, path)
    }

    /// Internal loading implementation.
    fn load_str_internal(
        &mut self,
        locale: &str,
        content: &str,
        path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let document_path = || {
            path.map_or_else(
                || PathBuf::from(format!("<{locale}>")),
                Path::to_path_buf,
            )
        };

        let definitions = parse_document(content).map_err(|e| match e {
            ParseError::Syntax {
                line,
                column,
                message,
            } => LoadError::Parse {
                path: document_path(),
                line,
                column,
                message,
            },
            ParseError::UnexpectedEof { line, column } => LoadError::Parse {
                path: document_path(),
                line,
                column,
                message: "unexpected end of file".to_string(),
            },
        })?;

        let registry = self.locales.entry(locale.to_string()).or_default();

        let count = definitions.len();
        for def in definitions {
            registry.insert(def).map_err(|key| LoadError::Duplicate {
                locale: locale.to_string(),
                key,
            })?;
        }

        Ok(count)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve a localized, pluralized, formatted string.
    ///
    /// Looks up `key` for `locale` (falling back to the bare language and
    /// then the default locale), selects the plural category for `quantity`
    /// with the entry's rule type, and substitutes `[quantity,
    /// extra_args...]` positionally into the selected template.
    ///
    /// Pure with respect to catalog state: identical arguments always yield
    /// identical output.
    ///
    /// # Example
    ///
    /// ```
    /// use pluralform::{MessageCatalog, args};
    ///
    /// let mut catalog = MessageCatalog::new();
    /// catalog
    ///     .load_messages_str(
    ///         "en",
    ///         r#"
    ///         numberOfItems = "%#@count@" (%d, %@) {
    ///             count(d) { other: "You have %d items, total %@." }
    ///         };
    ///     "#,
    ///     )
    ///     .unwrap();
    ///
    /// let text = catalog
    ///     .resolve("numberOfItems", "en", 3, &args!["KES. 300"])
    ///     .unwrap();
    /// assert_eq!(text, "You have 3 items, total KES. 300.");
    /// ```
    pub fn resolve(
        &self,
        key: &str,
        locale: &str,
        quantity: impl Into<Quantity>,
        extra_args: &[Value],
    ) -> Result<String, ResolveError> {
        let quantity = quantity.into();
        let (def, matched) = self.definition(locale, key)?;
        let lang = self.rules_language(matched);
        render(def, matched, lang, quantity, extra_args)
    }

    /// Look up a definition through the fallback chain: exact locale, bare
    /// language, then default locale.
    fn definition<'a>(
        &'a self,
        locale: &'a str,
        key: &str,
    ) -> Result<(&'a MessageDefinition, &'a str), ResolveError> {
        let mut candidates: Vec<&str> = Vec::with_capacity(3);
        for candidate in [locale, language_of(locale), self.default_locale.as_str()] {
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }

        for candidate in &candidates {
            if let Some(registry) = self.locales.get(*candidate)
                && let Some(def) = registry.get(key)
            {
                return Ok((def, candidate));
            }
        }

        let mut available: Vec<String> = Vec::new();
        for candidate in &candidates {
            if let Some(registry) = self.locales.get(*candidate) {
                available.extend(registry.keys().map(str::to_string));
            }
        }
        available.sort();
        available.dedup();

        Err(ResolveError::UnknownKey {
            key: key.to_string(),
            locale: locale.to_string(),
            suggestions: compute_suggestions(key, available.iter()),
        })
    }

    /// Pick the plural-rules language for a matched locale.
    ///
    /// Unsupported languages degrade to the default locale's language; the
    /// call still succeeds, but the degradation is logged.
    fn rules_language<'a>(&'a self, locale: &'a str) -> &'a str {
        let lang = language_of(locale);
        if is_supported_language(lang) {
            return lang;
        }
        let fallback = language_of(&self.default_locale);
        tracing::warn!(
            locale,
            fallback,
            "no plural rules registered for locale, using default locale rules"
        );
        fallback
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check every loaded definition for catalog malformations.
    ///
    /// A catalog this returns no warnings for never fails with
    /// [`ResolveError::MissingFallbackCategory`],
    /// [`ResolveError::UndefinedVariable`], or
    /// [`ResolveError::RecursionLimit`] at call time. Run this in a test or
    /// a deployment gate rather than trusting call-time errors in
    /// production.
    pub fn validate(&self) -> Vec<CatalogWarning> {
        let mut warnings = Vec::new();

        for (locale, registry) in &self.locales {
            for (key, def) in registry.definitions() {
                self.validate_definition(locale, key, def, &mut warnings);

                if *locale != self.default_locale
                    && !self.contains(&self.default_locale, key)
                {
                    warnings.push(CatalogWarning::MissingFromDefault {
                        locale: locale.clone(),
                        key: key.to_string(),
                        default_locale: self.default_locale.clone(),
                    });
                }
            }
        }

        warnings
    }

    fn validate_definition(
        &self,
        locale: &str,
        key: &str,
        def: &MessageDefinition,
        warnings: &mut Vec<CatalogWarning>,
    ) {
        // Every rule set needs its `other` fallback.
        for (name, variable) in &def.variables {
            if !variable.has_fallback() {
                warnings.push(CatalogWarning::MissingFallback {
                    locale: locale.to_string(),
                    key: key.to_string(),
                    variable: name.clone(),
                });
            }
        }

        // Referenced vs defined variables.
        let mut referenced: BTreeSet<&str> = def.format_key.variables().collect();
        for variable in def.variables.values() {
            for form in variable.forms.values() {
                referenced.extend(form.variables());
            }
        }
        for name in &referenced {
            if !def.variables.contains_key(*name) {
                warnings.push(CatalogWarning::UndefinedVariable {
                    locale: locale.to_string(),
                    key: key.to_string(),
                    variable: (*name).to_string(),
                });
            }
        }
        for name in def.variables.keys() {
            if !referenced.contains(name.as_str()) {
                warnings.push(CatalogWarning::UnusedVariable {
                    locale: locale.to_string(),
                    key: key.to_string(),
                    variable: name.clone(),
                });
            }
        }

        if has_variable_cycle(def) {
            warnings.push(CatalogWarning::CyclicVariables {
                locale: locale.to_string(),
                key: key.to_string(),
            });
            // The specifier check below would not terminate.
            return;
        }

        // Declared specifier list against the canonical expansion.
        if !def.specifiers.is_empty() {
            let found = expanded_placeholders(def);
            if found != def.specifiers {
                warnings.push(CatalogWarning::SpecifierMismatch {
                    locale: locale.to_string(),
                    key: key.to_string(),
                    declared: placeholder_list(&def.specifiers),
                    found: placeholder_list(&found),
                });
            }
        }
    }
}

/// The primary language subtag of a locale identifier ("pt-BR" -> "pt").
fn language_of(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

/// Render a placeholder list for warning display.
fn placeholder_list(placeholders: &[Placeholder]) -> String {
    placeholders
        .iter()
        .map(Placeholder::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Detect cycles in the variable reference graph of a definition.
fn has_variable_cycle(def: &MessageDefinition) -> bool {
    fn visit<'a>(
        def: &'a MessageDefinition,
        name: &'a str,
        stack: &mut Vec<&'a str>,
    ) -> bool {
        if stack.contains(&name) {
            return true;
        }
        let Some(variable) = def.variables.get(name) else {
            return false;
        };
        stack.push(name);
        for form in variable.forms.values() {
            for next in form.variables() {
                if visit(def, next, stack) {
                    return true;
                }
            }
        }
        stack.pop();
        false
    }

    let mut stack = Vec::new();
    def.format_key
        .variables()
        .any(|name| visit(def, name, &mut stack))
}

/// The placeholder sequence of a definition's canonical expansion, using the
/// `other` form of each referenced variable.
fn expanded_placeholders(def: &MessageDefinition) -> Vec<Placeholder> {
    fn walk(def: &MessageDefinition, template: &FormatTemplate, out: &mut Vec<Placeholder>) {
        for segment in &template.segments {
            match segment {
                Segment::Placeholder(ph) => out.push(*ph),
                Segment::Variable(name) => {
                    if let Some(variable) = def.variables.get(name)
                        && let Some(form) = variable.form(PluralCategory::Other)
                    {
                        walk(def, form, out);
                    }
                }
                Segment::Literal(_) => {}
            }
        }
    }

    let mut out = Vec::new();
    walk(def, &def.format_key, &mut out);
    out
}
