//! Headless mode — one search pass rendered to stdout.
//!
//! Text output mirrors what the TUI shows: the status line, then one line per
//! match with its badge, followed by matched notes and (in private mode) the
//! composition row. An empty result prints "No matches." under the status
//! line, as the TUI does. JSON output serializes the same card models.

use scent_core::{
    search::{search, SearchOptions},
    session::SessionConfig,
    view::{status_line, CardView, NO_MATCHES},
    Catalog,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub query: String,
    pub owned_only: bool,
    pub dupes_only: bool,
    pub format: OutputFormat,
    pub banner_cap: usize,
    pub notes_cap: usize,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    query: &'a str,
    status: String,
    total_count: usize,
    applied_labels: &'a [String],
    private_mode: bool,
    results: Vec<ReportItem>,
}

#[derive(Debug, Serialize)]
struct ReportItem {
    key: String,
    #[serde(flatten)]
    card: CardView,
    matched_notes: Vec<String>,
}

/// Run the query against `catalog` and render it in the requested format.
pub fn render(
    catalog: &Catalog,
    options: &HeadlessOptions,
    session: SessionConfig,
) -> anyhow::Result<String> {
    let search_options = SearchOptions {
        owned_only: options.owned_only,
        dupes_only: options.dupes_only,
        session,
        notes_cap: options.notes_cap,
    };
    let outcome = search(catalog, &options.query, &search_options);
    let status = status_line(&outcome, &options.query, options.banner_cap);
    tracing::debug!(query = %options.query, matches = outcome.total_count, "headless: rendered");

    match options.format {
        OutputFormat::Json => {
            let report = Report {
                query: &options.query,
                status,
                total_count: outcome.total_count,
                applied_labels: &outcome.applied_labels,
                private_mode: outcome.private_mode,
                results: outcome
                    .matches
                    .iter()
                    .map(|e| ReportItem {
                        key: e.key.clone(),
                        card: CardView::build(&e.record, &session),
                        matched_notes: outcome.matched_notes_for(e).to_vec(),
                    })
                    .collect(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text => {
            let mut out = status;
            if outcome.matches.is_empty() {
                out.push('\n');
                out.push_str(NO_MATCHES);
            }
            for entry in &outcome.matches {
                let card = CardView::build(&entry.record, &session);
                out.push('\n');
                out.push_str(&format!("{}  [{}]", card.title, card.badge));
                if entry.owned {
                    out.push_str(" · Owned");
                }
                let notes = outcome.matched_notes_for(entry);
                if !notes.is_empty() {
                    out.push_str(&format!("\n    matched notes: {}", notes.join(", ")));
                }
                if let Some(built_from) = &card.built_from {
                    out.push_str(&format!("\n    built from: {built_from}"));
                }
            }
            Ok(out)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
