//! Matcher — evaluates one catalog entry against a parsed query.
//!
//! Groups are ANDed; alternatives inside a group are ORed; an alternative
//! matches when it is a substring of the haystack.

use crate::catalog::CatalogEntry;
use crate::query::{Mode, TermGroup};

/// Checkbox filters, ANDed with the mode filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    pub owned_only: bool,
    pub dupes_only: bool,
}

impl Filters {
    pub fn admits(&self, entry: &CatalogEntry) -> bool {
        (!self.owned_only || entry.owned) && (!self.dupes_only || entry.is_dupe)
    }
}

/// True when every group has an alternative contained in `haystack`. An
/// empty group list matches everything.
pub fn match_groups(haystack: &str, groups: &[TermGroup]) -> bool {
    groups
        .iter()
        .all(|g| g.alternatives.iter().any(|alt| haystack.contains(alt.as_str())))
}

/// Mode-specific match, not including [`Filters`].
pub fn matches_mode(entry: &CatalogEntry, mode: Mode, groups: &[TermGroup]) -> bool {
    match mode {
        Mode::HouseOnly => entry.is_house_original,
        Mode::DupesOf => entry.is_dupe && match_groups(&entry.reference, groups),
        Mode::Original => !entry.is_dupe && match_groups(&entry.haystack, groups),
        Mode::All => match_groups(&entry.haystack, groups),
    }
}

/// Full predicate: checkboxes, then mode.
pub fn matches(entry: &CatalogEntry, filters: Filters, mode: Mode, groups: &[TermGroup]) -> bool {
    filters.admits(entry) && matches_mode(entry, mode, groups)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
