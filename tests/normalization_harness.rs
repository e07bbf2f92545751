#![allow(unused)]
//! Normalization and extraction integration harness.
//!
//! # What this covers
//!
//! - **Text folding**: `normalize` is idempotent and insensitive to case and
//!   combining accents (proptest).
//! - **Schema tolerance**: every logical field resolves across the camelCase,
//!   spreadsheet-column and nested shapes of the sample catalog; the first
//!   resolving candidate in a chain always wins.
//! - **Flattening totality**: `to_text` terminates and never panics on
//!   arbitrarily nested JSON (proptest).
//! - **Insta snapshots**: the haystack for a spreadsheet-shaped record, so
//!   accessor-order changes are caught.
//!
//! # Running
//!
//! ```sh
//! cargo test --test normalization_harness
//! # Update snapshots after intentional changes:
//! cargo insta review
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use scent_core::extract::{extract_field, extract_flag, extract_text, fields, to_text};
use scent_core::haystack::build_haystack;
use scent_core::normalizer::{normalize, tokenize};
use scent_core::Record;
use serde_json::{json, Value};

fn record(key: &str) -> Record {
    sample_catalog()
        .get(key)
        .map(|e| e.record.clone())
        .expect("fixture key exists")
}

// ---------------------------------------------------------------------------
// Schema tolerance
// ---------------------------------------------------------------------------

#[rstest]
#[case::camel_case("de-001", "Bleu Nocturne", "Aromatic Fougère", "Bleu de Chanel")]
#[case::spreadsheet("de-002", "Santal Lumière", "Woody", "Santal 33")]
#[case::no_reference("de-004", "Bleu de Chanel", "Woody Aromatic", "")]
fn fields_resolve_across_schemas(
    #[case] key: &str,
    #[case] name: &str,
    #[case] family: &str,
    #[case] reference: &str,
) {
    let r = record(key);
    assert_eq!(extract_text(&r, fields::NAME), name);
    assert_eq!(extract_text(&r, fields::FAMILY), family);
    assert_eq!(extract_text(&r, fields::REFERENCE), reference);
}

#[rstest]
#[case("de-001", true)]
#[case("de-002", false)]
#[case("de-003", true)]
#[case("de-004", false)]
fn owned_flag_is_truthy_across_shapes(#[case] key: &str, #[case] owned: bool) {
    assert_eq!(extract_flag(&record(key), fields::OWNED), owned);
}

#[test]
fn first_resolving_candidate_wins() {
    let r = Record::new(json!({ "Name": "Second", "name": "First", "Fragrance": "Third" }));
    assert_eq!(extract_text(&r, fields::NAME), "First");

    let r = Record::new(json!({ "Name": "Second", "Fragrance": "Third" }));
    assert_eq!(extract_text(&r, fields::NAME), "Second");
}

#[test]
fn nested_private_field_resolves_first() {
    let r = Record::new(json!({
        "builtFrom": "flat",
        "private": { "builtFrom": ["Accord B-7", "Hedione"] }
    }));
    assert_eq!(extract_text(&r, fields::BUILT_FROM), "Accord B-7, Hedione");
}

#[test]
fn spreadsheet_haystack_snapshot() {
    insta::assert_snapshot!(
        build_haystack(&record("de-002")),
        @"de-002 | santal lumiere | dilettante | woody | santal 33 | sandalwood; cardamom; iris; leather"
    );
}

// ---------------------------------------------------------------------------
// Text folding
// ---------------------------------------------------------------------------

#[rstest]
#[case("Fougère", "fougere")]
#[case("SÁNDALO", "sandalo")]
#[case("  Crème Brûlée ", "creme brulee")]
#[case("Néroli", "neroli")]
fn accents_and_case_fold(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_ignores_ascii_case(s in "[a-zA-Z ]{0,30}") {
        prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s.to_lowercase()));
    }

    #[test]
    fn tokens_are_normalized_and_non_empty(s in "\\PC{0,40}") {
        for token in tokenize(&s) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(normalize(&token), token.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Flattening totality
// ---------------------------------------------------------------------------

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(6, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn to_text_is_total(v in json_value()) {
        let text = to_text(&v);
        // No empty elements survive the comma join.
        prop_assert!(!text.starts_with(", "));
        prop_assert!(!text.ends_with(", "));
        prop_assert!(!text.contains(", , "));
    }

    #[test]
    fn haystack_never_panics_on_odd_records(v in json_value()) {
        let _ = build_haystack(&Record::new(json!({ "name": v.clone(), "notes": v })));
    }
}
