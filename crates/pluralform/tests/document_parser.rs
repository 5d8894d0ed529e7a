//! Integration tests for the catalog document parser.

use pluralform::{ParseError, PluralCategory, RuleType, Segment, ValueType, parse_document};

// =============================================================================
// Plain Entries
// =============================================================================

#[test]
fn parse_plain_entry() {
    let defs = parse_document(r#"greeting_message = "Hello, world!";"#).unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].key, "greeting_message");
    assert_eq!(defs[0].rule_type, RuleType::Cardinal);
    assert!(defs[0].variables.is_empty());
    assert_eq!(
        defs[0].format_key.segments,
        vec![Segment::Literal("Hello, world!".to_string())]
    );
}

#[test]
fn parse_plain_entry_with_placeholder() {
    let defs = parse_document(r#"currency = "The currency is %@.";"#).unwrap();
    let types: Vec<_> = defs[0]
        .format_key
        .placeholders()
        .map(|ph| ph.value_type)
        .collect();
    assert_eq!(types, vec![ValueType::Str]);
}

#[test]
fn parse_multiple_entries() {
    let defs = parse_document(
        r#"
        greeting_message = "Hello, world!";
        cancel_button = "Cancel";
        save_button = "Save";
    "#,
    )
    .unwrap();
    assert_eq!(defs.len(), 3);
    assert_eq!(defs[1].key, "cancel_button");
}

#[test]
fn parse_skips_comments() {
    let defs = parse_document(
        r#"
        // the landing screen headline
        greeting_message = "Hello, world!";
        // trailing comment
    "#,
    )
    .unwrap();
    assert_eq!(defs.len(), 1);
}

#[test]
fn parse_empty_document() {
    assert!(parse_document("").unwrap().is_empty());
    assert!(parse_document("  \n // only a comment\n").unwrap().is_empty());
}

// =============================================================================
// Plural Entries
// =============================================================================

#[test]
fn parse_plural_entry() {
    let defs = parse_document(
        r#"
        numberOfSongs = "%#@count@" {
            count(d) { one: "You have 1 song.", other: "You have %d songs." }
        };
    "#,
    )
    .unwrap();

    let def = &defs[0];
    assert_eq!(def.key, "numberOfSongs");
    let count = def.variables.get("count").unwrap();
    assert_eq!(count.value_type, ValueType::Integer);
    assert_eq!(count.forms.len(), 2);
    assert!(count.forms.contains_key(&PluralCategory::One));
    assert!(count.has_fallback());
}

#[test]
fn parse_declared_specifier_list() {
    let defs = parse_document(
        r#"
        numberOfItems = "%#@count@" (%d, %@) {
            count(d) { other: "You have %d items, total %@." }
        };
    "#,
    )
    .unwrap();

    let types: Vec<_> = defs[0].specifiers.iter().map(|ph| ph.value_type).collect();
    assert_eq!(types, vec![ValueType::Integer, ValueType::Str]);
}

#[test]
fn parse_ordinal_rule_type() {
    let defs = parse_document(
        r#"
        finishedRace = "%#@position@" ordinal {
            position(d) { one: "%dst", two: "%dnd", few: "%drd", other: "%dth" }
        };
    "#,
    )
    .unwrap();
    assert_eq!(defs[0].rule_type, RuleType::Ordinal);
}

#[test]
fn parse_explicit_cardinal_rule_type() {
    let defs = parse_document(
        r#"
        numberOfSongs = "%#@count@" cardinal {
            count(d) { other: "%d songs" }
        };
    "#,
    )
    .unwrap();
    assert_eq!(defs[0].rule_type, RuleType::Cardinal);
}

#[test]
fn parse_float_variable_type() {
    let defs = parse_document(
        r#"
        bread = "%#@slices@" {
            slices(f) { other: "You have %f slices of bread." }
        };
    "#,
    )
    .unwrap();
    let slices = defs[0].variables.get("slices").unwrap();
    assert_eq!(slices.value_type, ValueType::Float);
}

#[test]
fn parse_multiple_variables() {
    let defs = parse_document(
        r#"
        inbox = "%#@messages@ %#@drafts@" {
            messages(d) { one: "1 message,", other: "%d messages," }
            drafts(d) { one: "1 draft", other: "%d drafts" }
        };
    "#,
    )
    .unwrap();
    assert_eq!(defs[0].variables.len(), 2);
}

#[test]
fn parse_trailing_comma_in_forms() {
    let defs = parse_document(
        r#"
        numberOfSongs = "%#@count@" {
            count(d) {
                one: "You have 1 song.",
                other: "You have %d songs.",
            }
        };
    "#,
    )
    .unwrap();
    assert_eq!(defs[0].variables["count"].forms.len(), 2);
}

#[test]
fn parse_all_six_categories() {
    let defs = parse_document(
        r#"
        numberOfDays = "%#@count@" {
            count(d) {
                zero: "zero", one: "one", two: "two",
                few: "few", many: "many", other: "other"
            }
        };
    "#,
    )
    .unwrap();
    assert_eq!(defs[0].variables["count"].forms.len(), 6);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_semicolon_is_an_error() {
    let err = parse_document(r#"greeting = "Hello""#).unwrap_err();
    match err {
        ParseError::Syntax { line, .. } | ParseError::UnexpectedEof { line, .. } => {
            assert_eq!(line, 1);
        }
    }
}

#[test]
fn unquoted_value_is_an_error() {
    let err = parse_document("greeting = Hello;").unwrap_err();
    match err {
        ParseError::Syntax { line, .. } => assert_eq!(line, 1),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn error_position_counts_lines() {
    let err = parse_document("greeting = \"Hi\";\nbad entry\n").unwrap_err();
    match err {
        ParseError::Syntax { line, .. } => assert_eq!(line, 2),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn unknown_category_name_is_an_error() {
    let result = parse_document(
        r#"
        numberOfSongs = "%#@count@" {
            count(d) { once: "You have 1 song." }
        };
    "#,
    );
    assert!(result.is_err());
}

#[test]
fn duplicate_category_is_an_error() {
    let result = parse_document(
        r#"
        numberOfSongs = "%#@count@" {
            count(d) { other: "a", other: "b" }
        };
    "#,
    );
    assert!(result.is_err());
}

#[test]
fn unknown_value_type_is_an_error() {
    let result = parse_document(
        r#"
        numberOfSongs = "%#@count@" {
            count(x) { other: "%d songs" }
        };
    "#,
    );
    assert!(result.is_err());
}
