//! scent-sources — catalog source adapters for scentfind.
//!
//! Each source reads the raw catalog document once; [`load`] parses it into
//! a [`scent_core::Catalog`] and folds every failure into a
//! [`CatalogState::Failed`] carrying the message shown to the user.

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

use chrono::{DateTime, Utc};
use scent_core::{Catalog, Record};
use serde_json::Value;
use std::future::Future;
use std::sync::LazyLock;

/// Status shown when the catalog cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str =
    "Could not load fragrances.json. Check JSON format and file name.";

/// Keys under which spreadsheet exports nest the record array.
const WRAPPER_KEYS: &[&str] = &["fragrances", "items", "records", "data"];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog must be an array of records, found {found}")]
    Shape { found: &'static str },
}

/// Trait implemented by each catalog source.
pub trait CatalogSource: Send + Sync {
    /// Human-readable origin, e.g. the file path.
    fn describe(&self) -> String;

    /// Read the whole document.
    fn read(&self) -> impl Future<Output = Result<Vec<u8>, CatalogError>> + Send;
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a catalog document into records.
///
/// Accepts a top-level array, or an object wrapping the array under one of
/// `fragrances`, `items`, `records` or `data`. Array elements that are not
/// objects are skipped.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Record>, CatalogError> {
    let doc: Value = serde_json::from_slice(bytes)?;
    let items = match doc {
        Value::Array(items) => items,
        Value::Object(mut map) => WRAPPER_KEYS
            .iter()
            .find_map(|k| match map.remove(*k) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or(CatalogError::Shape { found: "an object without a record array" })?,
        other => return Err(CatalogError::Shape { found: kind(&other) }),
    };

    let total = items.len();
    let records: Vec<Record> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| {
            if v.is_object() {
                Some(Record::new(v))
            } else {
                tracing::warn!(index = i, kind = kind(&v), "catalog: skipping non-object element");
                None
            }
        })
        .collect();

    tracing::debug!(total, kept = records.len(), "catalog: parsed");
    Ok(records)
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Outcome of the one-time catalog load.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Loaded {
        catalog: Catalog,
        loaded_at: DateTime<Utc>,
        source: String,
    },
    /// Terminal for the session; search runs against an empty catalog.
    Failed { message: String, detail: String },
}

static EMPTY: LazyLock<Catalog> = LazyLock::new(Catalog::default);

impl CatalogState {
    pub fn catalog(&self) -> &Catalog {
        match self {
            CatalogState::Loaded { catalog, .. } => catalog,
            CatalogState::Failed { .. } => &EMPTY,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded { .. })
    }

    /// One-line description for status bars.
    pub fn summary(&self) -> String {
        match self {
            CatalogState::Loaded { catalog, loaded_at, source } => format!(
                "{} fragrances from {source} (loaded {})",
                catalog.len(),
                loaded_at.format("%H:%M:%S")
            ),
            CatalogState::Failed { message, .. } => message.clone(),
        }
    }
}

/// Read and parse `source` once. Never fails: errors become
/// [`CatalogState::Failed`] with [`LOAD_FAILED_MESSAGE`].
pub async fn load<S: CatalogSource>(source: &S) -> CatalogState {
    let name = source.describe();
    let parsed = match source.read().await {
        Ok(bytes) => parse_catalog(&bytes),
        Err(e) => Err(e),
    };

    match parsed {
        Ok(records) => {
            let catalog = Catalog::new(records);
            tracing::debug!(source = %name, entries = catalog.len(), "catalog: loaded");
            CatalogState::Loaded { catalog, loaded_at: Utc::now(), source: name }
        }
        Err(e) => {
            tracing::error!(source = %name, error = %e, "catalog: load failed");
            CatalogState::Failed { message: LOAD_FAILED_MESSAGE.to_string(), detail: e.to_string() }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
