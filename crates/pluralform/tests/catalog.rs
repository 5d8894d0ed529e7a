//! Integration tests for catalog loading and management.

use std::io::{Seek, Write};

use pluralform::{LoadError, MessageCatalog};
use tempfile::NamedTempFile;

// =========================================================================
// Builder and Basic API
// =========================================================================

#[test]
fn catalog_default_locale_is_english() {
    let catalog = MessageCatalog::new();
    assert_eq!(catalog.default_locale(), "en");
}

#[test]
fn catalog_builder_sets_default_locale() {
    let catalog = MessageCatalog::builder().default_locale("fr").build();
    assert_eq!(catalog.default_locale(), "fr");
}

#[test]
fn catalog_with_default_locale_shorthand() {
    let catalog = MessageCatalog::with_default_locale("de");
    assert_eq!(catalog.default_locale(), "de");
}

// =========================================================================
// Loading from String
// =========================================================================

#[test]
fn load_messages_str_counts_entries() {
    let mut catalog = MessageCatalog::new();
    let count = catalog
        .load_messages_str(
            "en",
            r#"
            greeting_message = "Hello, world!";
            numberOfSongs = "%#@count@" {
                count(d) { one: "You have 1 song.", other: "You have %d songs." }
            };
        "#,
        )
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(catalog.message_count("en"), 2);
    assert!(catalog.contains("en", "greeting_message"));
    assert!(!catalog.contains("en", "doesNotExist"));
}

#[test]
fn load_messages_str_replaces_previous_messages() {
    let mut catalog = MessageCatalog::new();
    catalog
        .load_messages_str("en", r#"old_key = "Old";"#)
        .unwrap();
    catalog
        .load_messages_str("en", r#"new_key = "New";"#)
        .unwrap();

    assert!(!catalog.contains("en", "old_key"));
    assert!(catalog.contains("en", "new_key"));
    assert_eq!(catalog.message_count("en"), 1);
}

#[test]
fn load_tracks_locales() {
    let mut catalog = MessageCatalog::new();
    catalog.load_messages_str("ru", r#"a = "x";"#).unwrap();
    catalog.load_messages_str("en", r#"a = "x";"#).unwrap();

    let locales: Vec<_> = catalog.locales().collect();
    assert_eq!(locales, vec!["en", "ru"]);
}

#[test]
fn duplicate_key_in_one_document_is_an_error() {
    let mut catalog = MessageCatalog::new();
    let err = catalog
        .load_messages_str("en", r#"hello = "a"; hello = "b";"#)
        .unwrap_err();

    match err {
        LoadError::Duplicate { locale, key } => {
            assert_eq!(locale, "en");
            assert_eq!(key, "hello");
        }
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[test]
fn parse_error_carries_locale_placeholder_path() {
    let mut catalog = MessageCatalog::new();
    let err = catalog.load_messages_str("en", "not a document").unwrap_err();

    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path.to_string_lossy(), "<en>");
            assert_eq!(line, 1);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

// =========================================================================
// Loading from Files
// =========================================================================

#[test]
fn load_messages_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"greeting_message = "Hello, world!";"#).unwrap();
    file.flush().unwrap();

    let mut catalog = MessageCatalog::new();
    let count = catalog.load_messages("en", file.path()).unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        catalog.resolve("greeting_message", "en", 0, &[]).unwrap(),
        "Hello, world!"
    );
}

#[test]
fn load_messages_missing_file_is_io_error() {
    let mut catalog = MessageCatalog::new();
    let err = catalog
        .load_messages("en", "/definitely/not/here.catalog")
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn reload_messages_picks_up_changes() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"greeting_message = "Hello, world!";"#).unwrap();
    file.flush().unwrap();

    let mut catalog = MessageCatalog::new();
    catalog.load_messages("en", file.path()).unwrap();

    file.as_file().set_len(0).unwrap();
    file.rewind().unwrap();
    write!(file, r#"greeting_message = "Goodbye, world!";"#).unwrap();
    file.flush().unwrap();

    catalog.reload_messages("en").unwrap();
    assert_eq!(
        catalog.resolve("greeting_message", "en", 0, &[]).unwrap(),
        "Goodbye, world!"
    );
}

#[test]
fn reload_of_string_loaded_locale_is_an_error() {
    let mut catalog = MessageCatalog::new();
    catalog.load_messages_str("en", r#"a = "x";"#).unwrap();

    let err = catalog.reload_messages("en").unwrap_err();
    match err {
        LoadError::NoPathForReload { locale } => assert_eq!(locale, "en"),
        other => panic!("expected reload error, got {other:?}"),
    }
}

#[test]
fn file_load_then_string_load_disables_reload() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"a = "x";"#).unwrap();
    file.flush().unwrap();

    let mut catalog = MessageCatalog::new();
    catalog.load_messages("en", file.path()).unwrap();
    catalog.load_messages_str("en", r#"a = "y";"#).unwrap();

    assert!(matches!(
        catalog.reload_messages("en"),
        Err(LoadError::NoPathForReload { .. })
    ));
}
