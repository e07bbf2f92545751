//! scentfind TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use scent_core::{config::Config, session::SessionConfig};
use scent_sources::CatalogState;
use widgets::query_bar::QueryBarState;

/// Start the TUI over an already loaded (or failed) catalog.
pub fn run(
    catalog_state: CatalogState,
    config: Config,
    session: SessionConfig,
    query: QueryBarState,
) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::debug!(theme = %theme.name, loaded = catalog_state.is_loaded(), "tui: starting");
    App::new(catalog_state, config, theme, session, query).run()
}
