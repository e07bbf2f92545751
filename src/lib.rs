//! scentfind — Fragrance Finder
//!
//! Terminal search over a fragrance catalog with synonym and intent
//! expansion. The binary either opens the TUI or, given `--query`, runs one
//! search pass and prints the result ([`headless`]).
//!
//! # Architecture
//!
//! ```text
//! scent-sources ──► scent-core::Catalog ──► scent-core::search ──┬──► scent-tui
//!  (file / stdin)                                               └──► headless
//! ```

pub mod headless;
