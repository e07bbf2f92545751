//! Core types for scent-core.
//!
//! A [`Record`] is one catalog entry of unknown shape. The catalog is authored
//! by hand and exported from spreadsheets, so the same logical field can live
//! under several keys; see [`crate::extract`] for how fields are resolved.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One fragrance record, kept exactly as it appeared in the catalog document.
///
/// The core never mutates a record. Accessors return borrowed JSON values;
/// flattening to text happens in [`crate::extract::to_text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The underlying JSON document.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Top-level key lookup. Non-object records have no keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|m| m.get(key))
    }

    /// Walk a nested key path, e.g. `["private", "builtFrom"]`.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.0, |v, key| v.as_object().and_then(|m| m.get(*key)))
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Display badge derived from the dupe / house-original flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    HouseOriginal,
    InspiredExpression,
    Original,
}

impl Badge {
    /// House-original wins over dupe when a record carries both flags.
    pub fn from_flags(is_house_original: bool, is_dupe: bool) -> Self {
        if is_house_original {
            Badge::HouseOriginal
        } else if is_dupe {
            Badge::InspiredExpression
        } else {
            Badge::Original
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Badge::HouseOriginal => write!(f, "House Original"),
            Badge::InspiredExpression => write!(f, "Inspired Expression"),
            Badge::Original => write!(f, "Original"),
        }
    }
}
