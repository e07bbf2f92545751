//! Field extraction — resolves a logical field from a record of unknown shape.
//!
//! Schema knowledge lives only in the accessor chains in [`fields`]. Each
//! chain is tried in order and the first candidate whose flattened text is
//! non-empty wins, even when a later candidate holds "more" data.

use crate::types::Record;
use serde_json::Value;

/// One way of locating a field value inside a record.
#[derive(Clone, Copy)]
pub enum Accessor {
    /// A top-level key, matched exactly (spreadsheet headers included).
    Key(&'static str),
    /// A nested key path such as `notes.top`.
    Path(&'static [&'static str]),
    /// A derivation over the whole record, for shapes a path cannot express.
    Derived(fn(&Record) -> Option<&Value>),
}

impl std::fmt::Debug for Accessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Accessor::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Accessor::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Accessor::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

impl Accessor {
    fn resolve<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        match self {
            Accessor::Key(key) => record.get(key),
            Accessor::Path(path) => record.get_path(path),
            Accessor::Derived(f) => f(record),
        }
    }
}

/// Return the first candidate value whose flattened text is non-blank.
pub fn extract_field<'r>(record: &'r Record, candidates: &[Accessor]) -> Option<&'r Value> {
    candidates
        .iter()
        .filter_map(|c| c.resolve(record))
        .find(|v| !to_text(v).trim().is_empty())
}

/// [`extract_field`] flattened to trimmed text; empty when nothing resolves.
pub fn extract_text(record: &Record, candidates: &[Accessor]) -> String {
    extract_field(record, candidates)
        .map(|v| to_text(v).trim().to_string())
        .unwrap_or_default()
}

/// Resolve a boolean flag with [`truthy`] semantics. Absent means false.
pub fn extract_flag(record: &Record, candidates: &[Accessor]) -> bool {
    extract_field(record, candidates).is_some_and(truthy)
}

/// Flatten any JSON value to display text.
///
/// Lists and objects join their non-empty flattened members with `", "`;
/// object keys are dropped and values keep document order.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => join_flattened(items.iter()),
        Value::Object(map) => join_flattened(map.values()),
    }
}

fn join_flattened<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values
        .map(to_text)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Truthiness for catalog flags.
///
/// Spreadsheet exports write flags as text, so `"no"`, `"false"`, `"0"` and
/// blank strings are false alongside JSON `false`, `0` and `null`.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !matches!(
            crate::normalize(s).as_str(),
            "" | "false" | "no" | "n" | "0"
        ),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ---------------------------------------------------------------------------
// Accessor chains
// ---------------------------------------------------------------------------

/// Ordered accessor chains for every logical field of a catalog record.
pub mod fields {
    use super::Accessor::{self, Derived, Key, Path};
    use crate::types::Record;
    use serde_json::Value;

    pub const ID: &[Accessor] = &[Key("id"), Key("ID"), Key("Id")];
    pub const NAME: &[Accessor] = &[Key("name"), Key("Name"), Key("Fragrance")];
    pub const BRAND: &[Accessor] = &[Key("brand"), Key("Brand")];
    pub const HOUSE: &[Accessor] = &[Key("house"), Key("House")];
    pub const FAMILY: &[Accessor] = &[
        Key("family"),
        Key("Scent Family"),
        Key("Olfactive Family"),
        Key("scentFamily"),
        Key("olfactiveFamily"),
    ];
    /// Card order: the olfactive column wins over the scent column when a
    /// record carries both.
    pub const FAMILY_DISPLAY: &[Accessor] =
        &[Key("family"), Key("Olfactive Family"), Key("Scent Family")];
    pub const REFERENCE: &[Accessor] = &[
        Key("inspiredBy"),
        Key("Inspired By"),
        Key("reference"),
        Key("Reference"),
    ];
    pub const GENDER: &[Accessor] = &[Key("gender"), Key("Gender")];
    pub const CONCENTRATION: &[Accessor] = &[Key("concentration"), Key("Concentration")];
    pub const SIZE: &[Accessor] = &[Key("size"), Key("Size"), Key("Size (ml)")];
    pub const TAGS: &[Accessor] = &[Key("tags"), Key("Tags")];

    /// The raw `notes` field in whatever shape it was authored.
    pub const NOTES_RAW: &[Accessor] = &[Key("notes")];
    pub const NOTES_TOP: &[Accessor] = &[
        Key("notesTop"),
        Key("Top Notes"),
        Key("topNotes"),
        Key("top_notes"),
        Path(&["notes", "top"]),
    ];
    pub const NOTES_HEART: &[Accessor] = &[
        Key("notesHeart"),
        Key("Heart Notes"),
        Key("middleNotes"),
        Key("middle_notes"),
        Key("heartNotes"),
        Path(&["notes", "heart"]),
        Path(&["notes", "middle"]),
    ];
    pub const NOTES_BASE: &[Accessor] = &[
        Key("notesBase"),
        Key("Base Notes"),
        Key("Bottom Notes"),
        Key("baseNotes"),
        Key("base_notes"),
        Path(&["notes", "base"]),
    ];
    pub const NOTES_ALL: &[Accessor] = &[
        Key("notesText"),
        Key("Notes"),
        Key("All Notes"),
        Derived(flat_notes),
    ];

    /// Composition detail; searchable always, displayed only in private mode.
    pub const BUILT_FROM: &[Accessor] = &[
        Path(&["private", "builtFrom"]),
        Key("Built From"),
        Key("builtFrom"),
        Key("Components"),
        Key("components"),
    ];

    pub const OWNED: &[Accessor] = &[Key("owned"), Key("Owned")];
    pub const IS_DUPE: &[Accessor] = &[Key("isDupe"), Key("Is Dupe"), Key("dupe")];
    pub const IS_HOUSE_ORIGINAL: &[Accessor] = &[
        Key("isHouseOriginal"),
        Key("House Original"),
        Key("houseOriginal"),
    ];

    /// `notes` only when it is a flat list; pyramids resolve through the
    /// top/heart/base chains instead.
    fn flat_notes(record: &Record) -> Option<&Value> {
        record.get("notes").filter(|v| v.is_array())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
