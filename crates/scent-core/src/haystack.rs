//! Haystack builder — one normalized search string per record.
//!
//! The haystack concatenates every field a user might search by, across all
//! schema variants, with `" | "` between segments. The private `builtFrom`
//! field is always included: private mode controls display, not search.

use crate::extract::{extract_field, fields, to_text, Accessor};
use crate::normalizer::normalize;
use crate::notes::extract_notes;
use crate::types::Record;

pub const SEPARATOR: &str = " | ";

/// Field chains contributing to the haystack, in output order. Notes tiers
/// are appended after these.
const HEAD: &[&[Accessor]] = &[
    fields::ID,
    fields::NAME,
    fields::BRAND,
    fields::HOUSE,
    fields::FAMILY,
    fields::REFERENCE,
    fields::GENDER,
    fields::CONCENTRATION,
    fields::SIZE,
    fields::TAGS,
    fields::NOTES_RAW,
];

pub fn build_haystack(record: &Record) -> String {
    let notes = extract_notes(record);

    let head = HEAD
        .iter()
        .map(|chain| extract_field(record, chain).map(to_text).unwrap_or_default());
    let tail = [
        notes.top,
        notes.heart,
        notes.base,
        notes.all,
        extract_field(record, fields::BUILT_FROM)
            .map(to_text)
            .unwrap_or_default(),
    ];

    head.chain(tail)
        .map(|segment| normalize(&segment))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// The normalized reference field alone; `dupes of` matches against this.
pub fn build_reference(record: &Record) -> String {
    extract_field(record, fields::REFERENCE)
        .map(|v| normalize(&to_text(v)))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn haystack_covers_every_schema_variant() {
        let r = Record::new(json!({
            "id": "de-001",
            "name": "Bleu Nocturne",
            "brand": "Dilettante",
            "Olfactive Family": "Aromatic Fougère",
            "Inspired By": "Bleu de Chanel",
            "gender": "Masculine",
            "Concentration": "EDP",
            "Size (ml)": 50,
            "tags": ["office", "blue"],
            "notes": { "top": ["Grapefruit"], "heart": "Ginger", "base": ["Incense"] },
            "private": { "builtFrom": "Accord B-7" }
        }));
        insta::assert_snapshot!(
            build_haystack(&r),
            @"de-001 | bleu nocturne | dilettante | aromatic fougere | bleu de chanel | masculine | edp | 50 | office, blue | grapefruit, ginger, incense | grapefruit | ginger | incense | accord b-7"
        );
    }

    #[test]
    fn empty_record_has_empty_haystack() {
        assert_eq!(build_haystack(&Record::new(json!({}))), "");
        assert_eq!(build_haystack(&Record::new(json!("just a string"))), "");
    }

    #[test]
    fn private_field_is_searchable() {
        let r = Record::new(json!({ "name": "Quiet", "private": { "builtFrom": ["Iso E Super"] } }));
        assert!(build_haystack(&r).contains("iso e super"));
    }

    #[test]
    fn reference_is_normalized() {
        let r = Record::new(json!({ "reference": "  Aventus — Creed " }));
        assert_eq!(build_reference(&r), "aventus — creed");
    }
}
