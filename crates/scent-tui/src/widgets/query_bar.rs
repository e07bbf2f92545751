//! Query bar widget — search input plus the owned/dupes checkboxes.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! The checkboxes are flipped by the app shell (`o` / `d`, `Alt+o` / `Alt+d`,
//! or `:owned` / `:dupes`) so they work from any pane.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    /// The raw query as typed.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
    pub owned_only: bool,
    pub dupes_only: bool,
}

impl QueryBarState {
    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        Self { cursor: query.len(), query, ..Default::default() }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Handle an editing event. Returns true when the query text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: char inserted");
                true
            }
            AppEvent::Backspace if self.cursor > 0 => {
                let prev = prev_boundary(&self.query, self.cursor);
                self.query.remove(prev);
                self.cursor = prev;
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = prev_boundary(&self.query, self.cursor);
                false
            }
            AppEvent::Nav(Direction::Right) => {
                self.cursor = next_boundary(&self.query, self.cursor);
                false
            }
            _ => false,
        }
    }
}

fn prev_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

fn next_boundary(s: &str, cursor: usize) -> usize {
    s[cursor..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| cursor + i)
        .unwrap_or(s.len())
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

const TOGGLES_WIDTH: u16 = 34;

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    private_mode: bool,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a QueryBarState, focused: bool, private_mode: bool, theme: &'a Theme) -> Self {
        Self { state, focused, private_mode, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(TOGGLES_WIDTH + 2));
        (x, area.y + 1)
    }
}

fn checkbox(on: bool, label: &str) -> String {
    format!("[{}] {label}", if on { 'x' } else { ' ' })
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(TOGGLES_WIDTH)])
            .split(inner);

        let query_line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search — try \"dupes of bleu\" or \"fresh citrus\"",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        let lock = if self.private_mode { "🔓" } else { "🔒" };
        let toggles = format!(
            "{}  {}  {lock}",
            checkbox(self.state.owned_only, "owned"),
            checkbox(self.state.dupes_only, "dupes"),
        );
        Paragraph::new(Line::from(toggles)).render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
