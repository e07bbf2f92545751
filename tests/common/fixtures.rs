//! Static catalog documents used across harnesses.
//!
//! The sample catalog deliberately mixes schemas: camelCase and spreadsheet
//! column names, pyramid and flat notes, string and boolean flags.

use scent_core::{Catalog, Record};

/// A small house catalog in the shapes seen in real exports.
pub const CATALOG_JSON: &str = r#"[
  {
    "id": "de-001",
    "name": "Bleu Nocturne",
    "house": "Dilettante",
    "family": "Aromatic Fougère",
    "isDupe": true,
    "inspiredBy": "Bleu de Chanel",
    "gender": "Masculine",
    "notes": { "top": ["Grapefruit", "Ginger"], "heart": "Incense", "base": ["Cedar", "Sandalwood"] },
    "owned": true
  },
  {
    "id": "de-002",
    "Name": "Santal Lumière",
    "Brand": "Dilettante",
    "Olfactive Family": "Woody",
    "Is Dupe": "Yes",
    "Inspired By": "Santal 33",
    "Notes": "Sandalwood; Cardamom; Iris; Leather",
    "Owned": "no"
  },
  {
    "id": "de-003",
    "name": "Aurore Blanche",
    "house": "Dilettante",
    "family": "Citrus Aromatic",
    "isHouseOriginal": true,
    "notes": "Bergamot, Neroli, Airy Musk",
    "private": { "builtFrom": ["Accord B-7", "Hedione"] },
    "owned": 1
  },
  {
    "id": "de-004",
    "name": "Bleu de Chanel",
    "house": "Chanel",
    "family": "Woody Aromatic",
    "notes": ["Grapefruit", "Incense", "Ginger", "Sandalwood"]
  },
  {
    "id": "de-005",
    "name": "Ambre Sauvage",
    "brand": "Dilettante",
    "family": "Amber",
    "isDupe": true,
    "inspiredBy": "Sauvage Elixir",
    "notes": "Ambroxan, Lavender, Licorice"
  },
  {
    "id": "de-006",
    "name": "Jardin Vert",
    "house": "Dilettante",
    "family": "Green",
    "isHouseOriginal": "true",
    "notes": ["Fig Leaf", "Galbanum", "Lemon"]
  }
]"#;

/// The parsed sample catalog.
pub fn sample_catalog() -> Catalog {
    let value: serde_json::Value =
        serde_json::from_str(CATALOG_JSON).expect("fixture catalog is valid JSON");
    value
        .as_array()
        .expect("fixture catalog is an array")
        .iter()
        .cloned()
        .map(Record::new)
        .collect()
}
