//! In-memory catalog — records plus everything search derives from them.
//!
//! The catalog is immutable once built, so haystacks, sort keys, flags and
//! note lists are computed here exactly once rather than on every keystroke.

use crate::extract::{extract_flag, extract_text, fields};
use crate::haystack::{build_haystack, build_reference};
use crate::normalizer::normalize;
use crate::notes::note_list;
use crate::types::{Badge, Record};
use std::collections::{HashMap, HashSet};

/// One record with its precomputed search data.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub record: Record,
    /// Stable per-catalog identifier: the record's `id`, else its normalized
    /// name with whitespace runs replaced by `_`. Collisions get `_2`, `_3`…
    pub key: String,
    pub haystack: String,
    /// Normalized reference field; the haystack for `dupes of` queries.
    pub reference: String,
    /// Normalized display name.
    pub sort_key: String,
    /// Individually listed notes, original casing.
    pub notes: Vec<String>,
    pub owned: bool,
    pub is_dupe: bool,
    pub is_house_original: bool,
}

impl CatalogEntry {
    fn new(record: Record) -> Self {
        let sort_key = normalize(&extract_text(&record, fields::NAME));
        Self {
            key: base_key(&record, &sort_key),
            haystack: build_haystack(&record),
            reference: build_reference(&record),
            notes: note_list(&record),
            owned: extract_flag(&record, fields::OWNED),
            is_dupe: extract_flag(&record, fields::IS_DUPE),
            is_house_original: extract_flag(&record, fields::IS_HOUSE_ORIGINAL),
            sort_key,
            record,
        }
    }

    pub fn badge(&self) -> Badge {
        Badge::from_flags(self.is_house_original, self.is_dupe)
    }

    /// Display name in original casing.
    pub fn name(&self) -> String {
        extract_text(&self.record, fields::NAME)
    }
}

fn base_key(record: &Record, normalized_name: &str) -> String {
    let id = extract_text(record, fields::ID);
    if !id.is_empty() {
        return id;
    }
    normalized_name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// The loaded catalog, in document order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_key: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        let mut used: HashSet<String> = HashSet::new();
        let entries: Vec<CatalogEntry> = records
            .into_iter()
            .map(|record| {
                let mut entry = CatalogEntry::new(record);
                let base = entry.key.clone();
                let mut n = 1;
                while !used.insert(entry.key.clone()) {
                    n += 1;
                    entry.key = format!("{base}_{n}");
                }
                entry
            })
            .collect();
        let by_key = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();
        Self { entries, by_key }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.by_key.get(key).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Record> for Catalog {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
