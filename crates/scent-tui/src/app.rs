//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Every change to the query
//! or the checkboxes runs one full search pass via [`AppState::refresh`].

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        card::DetailCard,
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        result_list::{ResultList, ResultListState},
        status_bar::StatusBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use regex::Regex;
use scent_core::{
    config::Config,
    highlight::term_pattern,
    search::{search, SearchOptions, SearchOutcome},
    session::{PrivateGate, SessionConfig},
    view::{banner, status_line},
    CatalogEntry,
};
use scent_sources::CatalogState;
use std::{collections::HashMap, io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Results,
    Query,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// Result set
// ---------------------------------------------------------------------------

/// Owned snapshot of the last search pass. Entries are referenced by key and
/// looked up in the catalog at render time.
#[derive(Debug, Default)]
pub struct ResultSet {
    pub keys: Vec<String>,
    pub matched_notes: HashMap<String, Vec<String>>,
    pub highlight: Option<Regex>,
    /// Match count and the raw query.
    pub summary: String,
    pub banner: Option<String>,
}

impl ResultSet {
    fn from_outcome(outcome: &SearchOutcome<'_>, raw: &str, banner_cap: usize) -> Self {
        Self {
            keys: outcome.matches.iter().map(|e| e.key.clone()).collect(),
            matched_notes: outcome.matched_notes.clone(),
            highlight: term_pattern(&outcome.highlight_terms),
            summary: status_line(outcome, raw, 0),
            banner: banner(&outcome.applied_labels, banner_cap),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub catalog_state: CatalogState,
    pub config: Config,
    pub theme: Theme,
    pub gate: PrivateGate,
    pub session: SessionConfig,
    pub query: QueryBarState,
    pub results_list: ResultListState,
    pub results: ResultSet,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// Feedback from the last command, shown in the status bar.
    pub notice: Option<String>,
    pub quit: bool,
}

impl AppState {
    /// Re-run the search for the current query, checkboxes and session.
    pub fn refresh(&mut self) {
        let options = SearchOptions {
            owned_only: self.query.owned_only,
            dupes_only: self.query.dupes_only,
            session: self.session,
            notes_cap: self.config.search.matched_notes_cap,
        };
        let outcome = search(self.catalog_state.catalog(), &self.query.query, &options);
        self.results = ResultSet::from_outcome(
            &outcome,
            &self.query.query,
            self.config.search.max_banner_labels,
        );
        self.results_list.clamp(self.results.len());
        tracing::debug!(
            query = %self.query.query,
            owned_only = options.owned_only,
            dupes_only = options.dupes_only,
            matches = self.results.len(),
            "search: refreshed"
        );
    }

    /// Current results resolved against the catalog, in display order.
    pub fn entries(&self) -> Vec<&CatalogEntry> {
        let catalog = self.catalog_state.catalog();
        self.results.keys.iter().filter_map(|k| catalog.get(k)).collect()
    }

    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.results
            .keys
            .get(self.results_list.selected)
            .and_then(|k| self.catalog_state.catalog().get(k))
    }

    fn on_query_changed(&mut self) {
        self.results_list.selected = 0;
        self.refresh();
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(
        catalog_state: CatalogState,
        config: Config,
        theme: Theme,
        session: SessionConfig,
        query: QueryBarState,
    ) -> Self {
        let gate = PrivateGate::new(config.private.code.clone());
        let mut state = AppState {
            catalog_state,
            config,
            theme,
            gate,
            session,
            query,
            results_list: ResultListState::default(),
            results: ResultSet::default(),
            focus: Focus::Query,
            prev_focus: Focus::Query,
            show_help: false,
            command_bar: CommandBarState::default(),
            notice: None,
            quit: false,
        };
        state.refresh();

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        let s = &self.state;
        terminal.draw(|frame| draw(frame, s))?;
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => s.command_bar.error = Some(msg),
                    }
                }
                AppEvent::Quit => s.quit = true,
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') if s.focus == Focus::Results => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if s.focus == Focus::Results => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Escape | AppEvent::Enter if s.focus == Focus::Query => {
                tracing::debug!("focus: Query -> Results");
                s.focus = Focus::Results;
            }

            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Results => Focus::Query,
                    Focus::Query | Focus::Command => Focus::Results,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::QueryFocus => {
                tracing::debug!("focus -> Query");
                s.focus = Focus::Query;
            }

            // Checkbox toggles and clear work regardless of focus
            AppEvent::ToggleOwned => {
                s.query.owned_only = !s.query.owned_only;
                s.on_query_changed();
            }
            AppEvent::ToggleDupes => {
                s.query.dupes_only = !s.query.dupes_only;
                s.on_query_changed();
            }
            AppEvent::ClearQuery => {
                s.query.clear();
                s.on_query_changed();
            }

            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Query | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Results => s.results_list.handle(&event, s.results.len()),
        Focus::Query => match event {
            // Up/down still walk the results while typing
            AppEvent::Nav(Direction::Up | Direction::Down) => {
                s.results_list.handle(&event, s.results.len())
            }
            _ => {
                if s.query.handle(&event) {
                    s.on_query_changed();
                }
            }
        },
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line query bar | body | 1-line status bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let pct = state.config.ui.results_pane_width_pct.min(90);
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[1]);

    let entries = state.entries();
    let selected = state.selected();
    let highlight = state.results.highlight.as_ref();
    let matched_notes = selected
        .and_then(|e| state.results.matched_notes.get(&e.key))
        .map(Vec::as_slice)
        .unwrap_or_default();

    let query_bar = QueryBar::new(
        &state.query,
        state.focus == Focus::Query,
        state.session.private_mode,
        &state.theme,
    );
    let cursor = query_bar.cursor_position(vert[0]);
    frame.render_widget(query_bar, vert[0]);
    frame.render_widget(
        ResultList::new(
            &state.results_list,
            &entries,
            highlight,
            state.focus == Focus::Results,
            &state.theme,
        ),
        horiz[0],
    );
    frame.render_widget(
        DetailCard::new(selected, state.session, matched_notes, highlight, &state.theme),
        horiz[1],
    );

    // A failed load owns the status row; otherwise notices win over the summary
    let catalog_summary = state.catalog_state.summary();
    let failed = !state.catalog_state.is_loaded();
    let right = match (&state.notice, failed) {
        (Some(notice), false) => notice.as_str(),
        _ => catalog_summary.as_str(),
    };
    frame.render_widget(
        StatusBar::new(
            &state.results.summary,
            state.results.banner.as_deref(),
            right,
            failed,
            &state.theme,
        ),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Query {
        frame.set_cursor_position(cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
