//! Test builders — ergonomic constructors for records and search options.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use scent_core::{Catalog, Record, SearchOptions, SessionConfig};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for catalog [`Record`] fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("Bleu Nocturne")
///     .dupe_of("Bleu de Chanel")
///     .notes(&["Grapefruit", "Incense"])
///     .owned()
///     .build();
/// ```
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::from(name));
        Self { fields }
    }

    pub fn id(self, id: &str) -> Self {
        self.field("id", id)
    }

    pub fn house(self, house: &str) -> Self {
        self.field("house", house)
    }

    pub fn family(self, family: &str) -> Self {
        self.field("family", family)
    }

    /// Mark as a dupe with the given reference fragrance.
    pub fn dupe_of(self, reference: &str) -> Self {
        self.field("isDupe", true).field("inspiredBy", reference)
    }

    pub fn house_original(self) -> Self {
        self.field("isHouseOriginal", true)
    }

    pub fn owned(self) -> Self {
        self.field("owned", true)
    }

    pub fn notes(self, notes: &[&str]) -> Self {
        self.field("notes", notes.to_vec())
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Record {
        Record::new(Value::Object(self.fields))
    }
}

/// Build a catalog from builders, in order.
pub fn catalog_of(records: impl IntoIterator<Item = RecordBuilder>) -> Catalog {
    records.into_iter().map(RecordBuilder::build).collect()
}

// ---------------------------------------------------------------------------
// OptionsBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchOptions`].
#[derive(Default)]
pub struct OptionsBuilder {
    options: SearchOptions,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owned_only(mut self) -> Self {
        self.options.owned_only = true;
        self
    }

    pub fn dupes_only(mut self) -> Self {
        self.options.dupes_only = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.options.session = SessionConfig { private_mode: true };
        self
    }

    pub fn build(self) -> SearchOptions {
        self.options
    }
}
