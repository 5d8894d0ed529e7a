//! Integration tests for catalog validation.

use pluralform::{CatalogWarning, MessageCatalog, ResolveError};

#[test]
fn clean_catalog_has_no_warnings() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str(
            "en",
            r#"
            greeting_message = "Hello!";
            numberOfSongs = "%#@count@" {
                count(d) { one: "You have 1 song.", other: "You have %d songs." }
            };
            numberOfItems = "%#@count@" (%d, %@) {
                count(d) { other: "You have %d items, total %@." }
            };
        "#,
        )
        .unwrap();

    assert_eq!(catalog.validate(), vec![]);
}

#[test]
fn missing_other_form_is_reported() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str(
            "en",
            r#"
            badSongs = "%#@count@" {
                count(d) { one: "One song." }
            };
        "#,
        )
        .unwrap();

    let warnings = catalog.validate();
    assert_eq!(
        warnings,
        vec![CatalogWarning::MissingFallback {
            locale: "en".to_string(),
            key: "badSongs".to_string(),
            variable: "count".to_string(),
        }]
    );
}

#[test]
fn undefined_variable_is_reported() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str("en", r#"broken = "%#@count@";"#)
        .unwrap();

    let warnings = catalog.validate();
    assert_eq!(
        warnings,
        vec![CatalogWarning::UndefinedVariable {
            locale: "en".to_string(),
            key: "broken".to_string(),
            variable: "count".to_string(),
        }]
    );
}

#[test]
fn unused_variable_is_reported() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str(
            "en",
            r#"
            stale = "No placeholders here." {
                count(d) { other: "%d things" }
            };
        "#,
        )
        .unwrap();

    let warnings = catalog.validate();
    assert_eq!(
        warnings,
        vec![CatalogWarning::UnusedVariable {
            locale: "en".to_string(),
            key: "stale".to_string(),
            variable: "count".to_string(),
        }]
    );
}

#[test]
fn specifier_mismatch_is_reported() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str(
            "en",
            r#"
            items = "%#@count@" (%d, %@) {
                count(d) { other: "You have %d items." }
            };
        "#,
        )
        .unwrap();

    let warnings = catalog.validate();
    assert_eq!(
        warnings,
        vec![CatalogWarning::SpecifierMismatch {
            locale: "en".to_string(),
            key: "items".to_string(),
            declared: "%d, %@".to_string(),
            found: "%d".to_string(),
        }]
    );
}

#[test]
fn key_missing_from_default_locale_is_reported() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str("en", r#"shared = "Shared.";"#)
        .unwrap();
    catalog
        .load_messages_str(
            "de",
            r#"
            shared = "Geteilt.";
            germanOnly = "Nur auf Deutsch.";
        "#,
        )
        .unwrap();

    let warnings = catalog.validate();
    assert_eq!(
        warnings,
        vec![CatalogWarning::MissingFromDefault {
            locale: "de".to_string(),
            key: "germanOnly".to_string(),
            default_locale: "en".to_string(),
        }]
    );
}

#[test]
fn cyclic_variables_are_reported() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str(
            "en",
            r#"
            endless = "%#@a@" {
                a(d) { other: "again: %#@b@" }
                b(d) { other: "and %#@a@" }
            };
        "#,
        )
        .unwrap();

    let warnings = catalog.validate();
    assert_eq!(
        warnings,
        vec![CatalogWarning::CyclicVariables {
            locale: "en".to_string(),
            key: "endless".to_string(),
        }]
    );
}

#[test]
fn nested_references_without_a_cycle_are_clean() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str(
            "en",
            r#"
            inbox = "Inbox: %#@outer@" {
                outer(d) { one: "1 message %#@tail@", other: "%d messages %#@tail@" }
                tail(d) { other: "waiting" }
            };
        "#,
        )
        .unwrap();

    assert_eq!(catalog.validate(), vec![]);
}

/// A catalog that validates cleanly never produces a fallback error at
/// call time, no matter the quantity.
#[test]
fn validated_catalog_never_fails_on_fallback() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str(
            "en",
            r#"
            numberOfSongs = "%#@count@" {
                count(d) { one: "You have 1 song.", other: "You have %d songs." }
            };
        "#,
        )
        .unwrap();
    catalog
        .load_messages_str(
            "ru",
            r#"
            numberOfSongs = "%#@count@" {
                count(d) {
                    one: "1", few: "2-4", many: "5+", other: "x"
                }
            };
        "#,
        )
        .unwrap();

    let warnings: Vec<_> = catalog
        .validate()
        .into_iter()
        .filter(|w| !matches!(w, CatalogWarning::MissingFromDefault { .. }))
        .collect();
    assert_eq!(warnings, vec![]);

    for locale in ["en", "ru"] {
        for n in 0..=200 {
            let result = catalog.resolve("numberOfSongs", locale, n, &[]);
            assert!(
                !matches!(result, Err(ResolveError::MissingFallbackCategory { .. })),
                "fallback failure for {locale} with quantity {n}"
            );
        }
    }
}
