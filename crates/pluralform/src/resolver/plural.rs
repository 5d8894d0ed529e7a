//! CLDR plural category resolution.
//!
//! This module selects plural categories following CLDR rules. Different
//! languages have different plural rules - English has "one" and "other",
//! while Russian has "one", "few", "many", and "other", and Arabic uses all
//! six categories.
//!
//! Plural rules are cached per thread per (language, rule type) to avoid
//! re-creating `PluralRules` instances on every call. The cache is
//! initialized lazily on first access within each thread.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory as IcuCategory, PluralRuleType, PluralRules};

use crate::types::{PluralCategory, Quantity, RuleType};

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by (language, rule type).
    static PLURAL_RULES_CACHE: RefCell<Vec<((&'static str, RuleType), PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// Whether a language code has registered plural rules.
pub fn is_supported_language(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|&code| code == lang)
}

/// Normalize a language code to a supported static string reference.
///
/// Returns the canonical `&'static str` for the language, or `"en"` for
/// unrecognized codes.
fn normalize_lang(lang: &str) -> &'static str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == lang)
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str, rule_type: RuleType) -> PluralRules {
    let loc = match lang {
        "en" => locale!("en"),
        "ru" => locale!("ru"),
        "ar" => locale!("ar"),
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "it" => locale!("it"),
        "pt" => locale!("pt"),
        "ja" => locale!("ja"),
        "zh" => locale!("zh"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "th" => locale!("th"),
        "id" => locale!("id"),
        "el" => locale!("el"),
        "ro" => locale!("ro"),
        "fa" => locale!("fa"),
        "bn" => locale!("bn"),
        "hi" => locale!("hi"),
        "he" => locale!("he"),
        _ => locale!("en"),
    };
    let kind = match rule_type {
        RuleType::Cardinal => PluralRuleType::Cardinal,
        RuleType::Ordinal => PluralRuleType::Ordinal,
    };
    PluralRules::try_new(loc.into(), kind.into()).expect("locale should be supported")
}

/// Translate the icu category enum to ours.
fn category_from(category: IcuCategory) -> PluralCategory {
    match category {
        IcuCategory::Zero => PluralCategory::Zero,
        IcuCategory::One => PluralCategory::One,
        IcuCategory::Two => PluralCategory::Two,
        IcuCategory::Few => PluralCategory::Few,
        IcuCategory::Many => PluralCategory::Many,
        IcuCategory::Other => PluralCategory::Other,
    }
}

/// Get the CLDR plural category for a quantity in a given language.
///
/// Rules are cached per thread per (language, rule type), so repeated calls
/// with the same language reuse the previously constructed `PluralRules`.
/// Non-integral quantities select `Other`; integral quantities (including
/// integral floats) use the integer rules.
///
/// # Arguments
///
/// * `lang` - Language code (e.g., "en", "ru", "ar")
/// * `rule_type` - Cardinal or ordinal selection
/// * `quantity` - The quantity to categorize
///
/// # Examples
///
/// ```
/// use pluralform::{PluralCategory, Quantity, RuleType, plural_category};
///
/// // English cardinal: 1 = one, everything else = other
/// assert_eq!(
///     plural_category("en", RuleType::Cardinal, Quantity::from(1)),
///     PluralCategory::One
/// );
/// assert_eq!(
///     plural_category("en", RuleType::Cardinal, Quantity::from(2)),
///     PluralCategory::Other
/// );
///
/// // Russian: complex rules for one, few, many
/// assert_eq!(
///     plural_category("ru", RuleType::Cardinal, Quantity::from(2)),
///     PluralCategory::Few
/// );
///
/// // English ordinal: 2nd = two, 3rd = few
/// assert_eq!(
///     plural_category("en", RuleType::Ordinal, Quantity::from(3)),
///     PluralCategory::Few
/// );
/// ```
pub fn plural_category(lang: &str, rule_type: RuleType, quantity: Quantity) -> PluralCategory {
    let Some(n) = quantity.integral() else {
        return PluralCategory::Other;
    };
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(key, _)| *key == (lang, rule_type)) {
            return category_from(entry.1.category_for(n));
        }
        let rules = build_rules(lang, rule_type);
        let category = category_from(rules.category_for(n));
        cache.push(((lang, rule_type), rules));
        category
    })
}
