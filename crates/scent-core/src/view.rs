//! Display models shared by the TUI and the headless renderer.
//!
//! [`CardView`] decides *what* a result card shows (which fields, which
//! placeholders, whether private detail is visible); the front ends decide
//! how it looks.

use crate::extract::{extract_flag, extract_text, fields, Accessor};
use crate::notes::extract_notes;
use crate::search::SearchOutcome;
use crate::session::SessionConfig;
use crate::types::{Badge, Record};
use serde::Serialize;

/// Placeholder for empty family/reference.
pub const EMPTY_FIELD: &str = "—";

/// Maximum expansion labels shown in the status banner by default.
pub const MAX_BANNER_LABELS: usize = 4;

/// Shown in place of a result list when nothing matched.
pub const NO_MATCHES: &str = "No matches.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub badge: String,
    pub owned: String,
    pub house: String,
    pub family: String,
    pub gender: String,
    pub concentration: String,
    pub reference: String,
    pub top: String,
    pub heart: String,
    pub base: String,
    /// Flat notes; empty whenever the record has a pyramid.
    pub notes: String,
    /// Composition detail, only in private mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_from: Option<String>,
}

impl CardView {
    pub fn build(record: &Record, session: &SessionConfig) -> Self {
        let notes = extract_notes(record);
        let badge = Badge::from_flags(
            extract_flag(record, fields::IS_HOUSE_ORIGINAL),
            extract_flag(record, fields::IS_DUPE),
        );
        let built_from = session
            .private_mode
            .then(|| extract_text(record, fields::BUILT_FROM))
            .filter(|s| !s.is_empty());

        Self {
            title: extract_text(record, fields::NAME),
            badge: badge.to_string(),
            owned: owned_label(extract_flag(record, fields::OWNED)).to_string(),
            house: or_else_text(record, fields::BRAND, fields::HOUSE),
            family: placeholder(extract_text(record, fields::FAMILY_DISPLAY)),
            gender: extract_text(record, fields::GENDER),
            concentration: extract_text(record, fields::CONCENTRATION),
            reference: placeholder(extract_text(record, fields::REFERENCE)),
            notes: if notes.has_pyramid { String::new() } else { notes.all },
            top: notes.top,
            heart: notes.heart,
            base: notes.base,
            built_from,
        }
    }

    /// Labelled detail rows in display order. Optional rows are omitted
    /// when empty; family and reference always appear.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("House", self.house.clone()),
            ("Olfactive Family", self.family.clone()),
        ];
        let optional = [
            ("Gender", &self.gender),
            ("Reference", &self.reference),
            ("Concentration", &self.concentration),
            ("Top", &self.top),
            ("Heart", &self.heart),
            ("Base", &self.base),
            ("Notes", &self.notes),
        ];
        rows.extend(
            optional
                .into_iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (k, v.clone())),
        );
        if let Some(b) = &self.built_from {
            rows.push(("Private", format!("Built from {b}")));
        }
        rows
    }
}

fn owned_label(owned: bool) -> &'static str {
    if owned {
        "Owned"
    } else {
        "Not owned"
    }
}

fn or_else_text(record: &Record, first: &[Accessor], second: &[Accessor]) -> String {
    let text = extract_text(record, first);
    if text.is_empty() {
        extract_text(record, second)
    } else {
        text
    }
}

fn placeholder(text: String) -> String {
    if text.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        text
    }
}

/// "matched using similar terms: a · b", or `None` when nothing expanded.
pub fn banner(labels: &[String], cap: usize) -> Option<String> {
    if labels.is_empty() || cap == 0 {
        return None;
    }
    let shown: Vec<&str> = labels.iter().take(cap).map(String::as_str).collect();
    Some(format!("matched using similar terms: {}", shown.join(" · ")))
}

/// One-line result summary for the status bar and headless output.
pub fn status_line(outcome: &SearchOutcome<'_>, raw: &str, cap: usize) -> String {
    let mut line = format!("{} match(es)", outcome.total_count);
    let raw = raw.trim();
    if !raw.is_empty() {
        line.push_str(&format!(" for \"{raw}\""));
    }
    if let Some(b) = banner(&outcome.applied_labels, cap) {
        line.push_str(" • ");
        line.push_str(&b);
    }
    line
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
