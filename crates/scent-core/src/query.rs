//! Query interpretation — command intent plus expanded term groups.
//!
//! A raw query is read twice: [`parse_command`] decides what kind of search
//! it is ("dupes of X", "original X", "house original"), and
//! [`build_groups`] turns the remaining words into OR-groups, one per typed
//! word, which the matcher ANDs together.

use crate::expansion::{ExpansionTable, INFERENCES};
use crate::normalizer::normalize;
use phf::phf_set;

/// Whole-query phrasings that ask for the house's own compositions.
static HOUSE_PHRASES: phf::Set<&'static str> = phf_set! {
    "house original",
    "house:original",
    "house originals",
    "house:originals",
    "my originals",
    "my original",
};

/// Prefixes asking for dupes of a reference, in priority order.
const DUPE_PREFIXES: &[&str] = &["dupes of ", "inspired by ", "clones of ", "dupe of ", "clone of "];

/// Prefixes asking for non-dupe originals, in priority order.
const ORIGINAL_PREFIXES: &[&str] = &["original ", "og ", "real "];

/// What kind of search a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Plain search over the full haystack.
    #[default]
    All,
    /// Dupes only, matched against their reference field.
    DupesOf,
    /// Non-dupes only, full haystack.
    Original,
    /// House originals; term groups are ignored.
    HouseOnly,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::All => write!(f, "all"),
            Mode::DupesOf => write!(f, "dupes_of"),
            Mode::Original => write!(f, "original"),
            Mode::HouseOnly => write!(f, "house_only"),
        }
    }
}

/// A parsed command: the mode plus whatever text is left to search for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Intent {
    pub mode: Mode,
    /// Normalized residual query text.
    pub residual: String,
}

impl Intent {
    /// Residual text split into search terms.
    pub fn terms(&self) -> Vec<String> {
        self.residual.split_whitespace().map(str::to_string).collect()
    }
}

/// Interpret `query` as a command. Matching runs on the normalized query, so
/// "Dupes Of Bleu" and "dupes of bleu" are the same command.
///
/// A prefix that leaves nothing to search for falls back to [`Mode::All`]
/// with the prefix word searched literally.
pub fn parse_command(query: &str) -> Intent {
    let s = normalize(query);

    if HOUSE_PHRASES.contains(s.as_str()) {
        return Intent { mode: Mode::HouseOnly, residual: String::new() };
    }

    let prefixed = |prefixes: &[&str], mode: Mode| {
        prefixes.iter().find_map(|p| {
            let rest = s.strip_prefix(p)?.trim();
            (!rest.is_empty()).then(|| Intent { mode, residual: rest.to_string() })
        })
    };

    prefixed(DUPE_PREFIXES, Mode::DupesOf)
        .or_else(|| prefixed(ORIGINAL_PREFIXES, Mode::Original))
        .unwrap_or_else(|| Intent { mode: Mode::All, residual: s.clone() })
}

/// The accepted alternatives for one typed word. The word itself is always
/// the first alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermGroup {
    pub token: String,
    pub alternatives: Vec<String>,
}

impl TermGroup {
    fn new(token: String) -> Self {
        Self { alternatives: vec![token.clone()], token }
    }

    fn add(&mut self, term: &str) {
        if !self.alternatives.iter().any(|a| a == term) {
            self.alternatives.push(term.to_string());
        }
    }
}

/// Term groups for a query plus the expansion labels that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    pub groups: Vec<TermGroup>,
    /// Deduplicated, in first-applied order. Callers cap this for display.
    pub applied_labels: Vec<String>,
}

impl Expansion {
    fn label(&mut self, label: &str) {
        if !self.applied_labels.iter().any(|l| l == label) {
            self.applied_labels.push(label.to_string());
        }
    }
}

/// Build one OR-group per typed term using the global expansion table.
pub fn build_groups(terms: &[String]) -> Expansion {
    build_groups_with(ExpansionTable::global(), terms)
}

/// [`build_groups`] against an explicit table.
pub fn build_groups_with(table: &ExpansionTable, terms: &[String]) -> Expansion {
    let mut out = Expansion::default();

    for term in terms.iter().map(|t| normalize(t)).filter(|t| !t.is_empty()) {
        let mut group = TermGroup::new(term.clone());

        if let Some(entry) = table.entry(&term) {
            for alt in &entry.alternatives {
                group.add(alt);
            }
            out.label(&entry.label);
        }

        for inference in INFERENCES.iter().filter(|i| i.applies_to(&term)) {
            for t in inference.family {
                group.add(t);
            }
            out.label(inference.label);
        }

        out.groups.push(group);
    }

    tracing::debug!(
        groups = out.groups.len(),
        labels = out.applied_labels.len(),
        "query: groups built"
    );
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
