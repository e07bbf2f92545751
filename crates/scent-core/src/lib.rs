//! scent-core — Fragrance Finder core library.
//!
//! This crate exposes the search pipeline layers as public modules, plus the
//! shared record type used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Record ──► extract ──► haystack ──► Catalog
//!                                        │
//! raw query ──► query (command + groups) ─┴──► search ──► matches + metadata
//!                   ▲                                         │
//!               expansion                                view / highlight
//! ```
//!
//! Everything here is synchronous and total: malformed records degrade to
//! empty fields, never to errors. The only fallible operation in the
//! workspace is loading the catalog, which lives in `scent-sources`.

pub mod catalog;
pub mod config;
pub mod expansion;
pub mod extract;
pub mod haystack;
pub mod highlight;
pub mod matcher;
pub mod normalizer;
pub mod notes;
pub mod query;
pub mod search;
pub mod session;
pub mod types;
pub mod view;

pub use catalog::{Catalog, CatalogEntry};
pub use normalizer::normalize;
pub use query::{Intent, Mode, TermGroup};
pub use search::{search, SearchOptions, SearchOutcome};
pub use session::{PrivateGate, SessionConfig};
pub use types::Record;
