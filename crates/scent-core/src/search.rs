//! Search entry point — the full per-query pipeline.
//!
//! ```text
//! raw ──► parse_command ──► build_groups ──► filter ──► stable sort ──► matched notes
//! ```
//!
//! A search pass is synchronous and total. Every keystroke in the TUI runs
//! one full pass; the catalog is small and its haystacks are precomputed.

use crate::catalog::{Catalog, CatalogEntry};
use crate::matcher::{matches, Filters};
use crate::normalizer::{collate, tokenize};
use crate::notes::{self, MATCHED_NOTES_CAP};
use crate::query::{build_groups, parse_command, Expansion, Intent, Mode};
use crate::session::SessionConfig;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub owned_only: bool,
    pub dupes_only: bool,
    pub session: SessionConfig,
    pub notes_cap: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            owned_only: false,
            dupes_only: false,
            session: SessionConfig::default(),
            notes_cap: MATCHED_NOTES_CAP,
        }
    }
}

impl SearchOptions {
    fn filters(&self) -> Filters {
        Filters { owned_only: self.owned_only, dupes_only: self.dupes_only }
    }
}

/// Result of one search pass. Borrows the catalog it was run against.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'c> {
    /// Matching entries sorted by normalized name under locale-aware
    /// collation; ties keep catalog order.
    pub matches: Vec<&'c CatalogEntry>,
    /// Matched notes by entry key. Entries without a hit have no key.
    pub matched_notes: HashMap<String, Vec<String>>,
    /// Every applied expansion label, deduplicated. Cap for display.
    pub applied_labels: Vec<String>,
    pub total_count: usize,
    /// What the user literally typed, normalized. Highlighting uses these
    /// and never the expansions.
    pub highlight_terms: Vec<String>,
    pub intent: Intent,
    pub private_mode: bool,
}

impl SearchOutcome<'_> {
    pub fn matched_notes_for(&self, entry: &CatalogEntry) -> &[String] {
        self.matched_notes
            .get(&entry.key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub fn search<'c>(catalog: &'c Catalog, raw: &str, options: &SearchOptions) -> SearchOutcome<'c> {
    let intent = parse_command(raw);
    let Expansion { groups, applied_labels } = match intent.mode {
        Mode::HouseOnly => Expansion::default(),
        _ => build_groups(&intent.terms()),
    };

    let filters = options.filters();
    let mut hits: Vec<&CatalogEntry> = catalog
        .entries()
        .iter()
        .filter(|e| matches(e, filters, intent.mode, &groups))
        .collect();
    hits.sort_by(|a, b| collate(&a.sort_key, &b.sort_key));

    let matched_notes: HashMap<String, Vec<String>> = hits
        .iter()
        .filter_map(|e| {
            let found = notes::matched_notes(&e.notes, &groups, options.notes_cap);
            (!found.is_empty()).then(|| (e.key.clone(), found))
        })
        .collect();

    tracing::debug!(
        mode = %intent.mode,
        groups = groups.len(),
        matches = hits.len(),
        catalog = catalog.len(),
        "search: pass complete"
    );

    SearchOutcome {
        total_count: hits.len(),
        matches: hits,
        matched_notes,
        applied_labels,
        highlight_terms: tokenize(raw),
        intent,
        private_mode: options.session.private_mode,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn catalog() -> Catalog {
        [
            json!({ "id": "1", "name": "Vetiver Royale", "notes": ["Vetiver", "Grapefruit"], "owned": true }),
            json!({ "id": "2", "name": "Bleu Nuit", "isDupe": true, "inspiredBy": "Bleu de Chanel", "notes": ["Incense", "Lemon"] }),
            json!({ "id": "3", "name": "atelier santal", "isHouseOriginal": true, "notes": { "base": ["Sandalwood"] } }),
            json!({ "id": "4", "name": "Amber Veil" }),
        ]
        .into_iter()
        .map(Record::new)
        .collect()
    }

    fn keys(outcome: &SearchOutcome<'_>) -> Vec<String> {
        outcome.matches.iter().map(|e| e.key.clone()).collect()
    }

    #[test]
    fn empty_query_returns_everything_sorted() {
        let c = catalog();
        let out = search(&c, "", &SearchOptions::default());
        assert_eq!(keys(&out), vec!["4", "3", "2", "1"]);
        assert!(out.applied_labels.is_empty());
        assert_eq!(out.total_count, 4);
    }

    #[test]
    fn names_sort_by_collation_not_code_point() {
        let c: Catalog = [
            json!({ "id": "z", "name": "Zeste" }),
            json!({ "id": "o", "name": "Ørsted" }),
            json!({ "id": "t", "name": "~Tilde" }),
            json!({ "id": "a", "name": "Amber" }),
        ]
        .into_iter()
        .map(Record::new)
        .collect();
        let out = search(&c, "", &SearchOptions::default());
        assert_eq!(keys(&out), vec!["t", "a", "o", "z"]);
    }

    #[test]
    fn house_original_returns_house_subset() {
        let c = catalog();
        let out = search(&c, "House Original", &SearchOptions::default());
        assert_eq!(keys(&out), vec!["3"]);
        assert!(out.applied_labels.is_empty());
    }

    #[test]
    fn matched_notes_are_keyed_by_entry() {
        let c = catalog();
        let out = search(&c, "sandalo", &SearchOptions::default());
        assert_eq!(keys(&out), vec!["3"]);
        assert_eq!(out.matched_notes_for(out.matches[0]), ["Sandalwood".to_string()]);
        assert_eq!(out.highlight_terms, vec!["sandalo"]);
    }

    #[test]
    fn checkboxes_narrow_results() {
        let c = catalog();
        let owned = SearchOptions { owned_only: true, ..Default::default() };
        let dupes = SearchOptions { dupes_only: true, ..Default::default() };
        assert_eq!(keys(&search(&c, "", &owned)), vec!["1"]);
        assert_eq!(keys(&search(&c, "", &dupes)), vec!["2"]);
    }

    #[test]
    fn highlight_terms_are_literal() {
        let c = catalog();
        let out = search(&c, "Dupes of Bleu", &SearchOptions::default());
        assert_eq!(out.intent.mode, Mode::DupesOf);
        assert_eq!(out.highlight_terms, vec!["dupes", "of", "bleu"]);
        assert_eq!(keys(&out), vec!["2"]);
    }

    #[test]
    fn private_mode_is_reported_not_applied() {
        let c = Catalog::new(vec![Record::new(json!({
            "name": "Quiet", "private": { "builtFrom": "Iso E Super" }
        }))]);
        let out = search(&c, "iso e super", &SearchOptions::default());
        assert_eq!(out.total_count, 1);
        assert!(!out.private_mode);
    }
}
