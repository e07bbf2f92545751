//! Notes — pyramid/flat notes resolution and matched-note metadata.
//!
//! Notes arrive as a flat list, a single string, a `{top, heart|middle, base}`
//! pyramid, or as separate spreadsheet columns. [`extract_notes`] resolves all
//! of them; [`note_list`] breaks them into individual note strings for the
//! "matched notes" chip.

use crate::extract::{extract_field, extract_text, fields, to_text};
use crate::normalizer::normalize;
use crate::query::TermGroup;
use crate::types::Record;
use std::collections::HashSet;

/// Upper bound on matched notes reported per record.
pub const MATCHED_NOTES_CAP: usize = 8;

/// Resolved notes of one record, each tier already flattened and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesView {
    pub top: String,
    pub heart: String,
    pub base: String,
    pub all: String,
    /// True iff any of top/heart/base is non-empty. The flat `all` notes are
    /// displayed only when this is false.
    pub has_pyramid: bool,
}

pub fn extract_notes(record: &Record) -> NotesView {
    let top = extract_text(record, fields::NOTES_TOP);
    let heart = extract_text(record, fields::NOTES_HEART);
    let base = extract_text(record, fields::NOTES_BASE);
    let all = extract_text(record, fields::NOTES_ALL);
    let has_pyramid = !(top.is_empty() && heart.is_empty() && base.is_empty());
    NotesView { top, heart, base, all, has_pyramid }
}

/// Every individually listed note of a record, original casing, deduplicated
/// by normalized form in first-seen order.
pub fn note_list(record: &Record) -> Vec<String> {
    let view = extract_notes(record);
    let raw = extract_field(record, fields::NOTES_RAW)
        .map(to_text)
        .unwrap_or_default();

    let mut seen = HashSet::new();
    [view.top, view.heart, view.base, view.all, raw]
        .iter()
        .flat_map(|tier| tier.split([',', ';']))
        .map(str::trim)
        .filter(|note| !note.is_empty())
        .filter(|note| seen.insert(normalize(note)))
        .map(str::to_string)
        .collect()
}

/// Notes of `notes` that contain any alternative of any group.
///
/// Scans group by group, so notes hit by the first typed term come first.
/// Informational only; the matcher never consults this.
pub fn matched_notes(notes: &[String], groups: &[TermGroup], cap: usize) -> Vec<String> {
    let folded: Vec<String> = notes.iter().map(|n| normalize(n)).collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for group in groups {
        for (note, key) in notes.iter().zip(&folded) {
            if out.len() >= cap {
                return out;
            }
            if group.alternatives.iter().any(|alt| key.contains(alt.as_str()))
                && seen.insert(key.as_str())
            {
                out.push(note.clone());
            }
        }
    }
    out
}

/// Convenience over [`note_list`] + [`matched_notes`] with the default cap.
pub fn compute_matched_notes(record: &Record, groups: &[TermGroup]) -> Vec<String> {
    matched_notes(&note_list(record), groups, MATCHED_NOTES_CAP)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
