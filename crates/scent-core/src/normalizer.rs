//! Normalizer — folds text into the comparison form used everywhere in search.
//!
//! Lower-case, NFD decomposition, combining marks U+0300–U+036F removed,
//! surrounding whitespace trimmed. "Café" and "cafe" compare equal.
//!
//! Ordering of folded text goes through [`collate`], a root-locale Unicode
//! collator, so letters NFD leaves alone (ø, æ, ß) sort among their base
//! letters and punctuation sorts ahead of letters.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .inspect_err(|e| tracing::warn!(error = %e, "collator unavailable, using code point order"))
        .ok()
});

/// Fold `text` into its search form. Never fails; idempotent.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize an optional value; `None` folds to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Split text into normalized, whitespace-separated tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Locale-aware comparison of two strings (root collation, tertiary
/// strength). Falls back to code point order if collation data is missing.
pub fn collate(a: &str, b: &str) -> Ordering {
    match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn folds_case_and_accents() {
        assert_eq!(normalize("Café"), normalize("cafe"));
        assert_eq!(normalize("  Eau de PARFUM "), "eau de parfum");
        assert_eq!(normalize("Sándalo"), "sandalo");
    }

    #[test]
    fn none_is_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some(" Oud ")), "oud");
    }

    #[test]
    fn tokenize_drops_blank_runs() {
        assert_eq!(tokenize("  Fresh   Citrus\t"), vec!["fresh", "citrus"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn collate_places_undecomposed_letters_with_their_base() {
        assert_eq!(collate("ørsted", "zeste"), Ordering::Less);
        assert_eq!(collate("amber", "ørsted"), Ordering::Less);
        assert_eq!(collate("æther", "b"), Ordering::Less);
    }

    #[test]
    fn collate_sorts_punctuation_before_letters() {
        assert_eq!(collate("~tilde", "amber"), Ordering::Less);
        assert_eq!(collate("bleu de chanel", "bleu nocturne"), Ordering::Less);
        assert_eq!(collate("oud", "oud"), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn collate_is_antisymmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(collate(&a, &b), collate(&b, &a).reverse());
        }

        #[test]
        fn normalize_never_keeps_combining_marks(s in "\\PC*") {
            prop_assert!(!normalize(&s).chars().any(is_combining_mark));
        }
    }
}
