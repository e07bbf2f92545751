//! Result list widget — the ranked matches on the left.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k`, `↓` / `j` | Move selection by one |
//! | `PageUp` / `PageDown` | Move selection by a page |
//! | `g` / `G` | First / last result |
//!
//! The view scrolls so the selection is always visible; the scroll offset is
//! derived at render time from the selection and the pane height.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};
use regex::Regex;
use scent_core::highlight::spans_with;
use scent_core::view::NO_MATCHES;
use scent_core::CatalogEntry;
use std::cell::Cell;

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ResultListState {
    /// Index of the highlighted row.
    pub selected: usize,
    /// Pane height from the last render, for page-sized moves.
    last_height: Cell<usize>,
}

impl ResultListState {
    fn page(&self) -> usize {
        match self.last_height.get() {
            0 => PAGE_STEP,
            h => h,
        }
    }

    /// Keep the selection inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Handle a navigation event over a list of `len` rows.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len - 1;
        self.selected = match event {
            AppEvent::Nav(Direction::Up) => self.selected.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.selected + 1).min(last),
            AppEvent::ScrollUp => self.selected.saturating_sub(self.page()),
            AppEvent::ScrollDown => (self.selected + self.page()).min(last),
            AppEvent::Top => 0,
            AppEvent::Bottom => last,
            _ => return,
        };
        tracing::debug!(selected = self.selected, "results: selection moved");
    }

    /// First visible row for a pane `height` rows tall.
    fn offset(&self, height: usize) -> usize {
        (self.selected + 1).saturating_sub(height.max(1))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultList<'a> {
    state: &'a ResultListState,
    entries: &'a [&'a CatalogEntry],
    terms: Option<&'a Regex>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    pub fn new(
        state: &'a ResultListState,
        entries: &'a [&'a CatalogEntry],
        terms: Option<&'a Regex>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, entries, terms, focused, theme }
    }

    fn row(&self, entry: &CatalogEntry, selected: bool) -> Line<'static> {
        let name = entry.name();
        let display = if name.is_empty() { "(unnamed)".to_string() } else { name };

        let mut spans: Vec<Span<'static>> = match self.terms {
            Some(re) => spans_with(re, &display)
                .into_iter()
                .map(|s| {
                    let style = if s.hit { self.theme.search_highlight } else { Default::default() };
                    Span::styled(s.text.to_string(), style)
                })
                .collect(),
            None => vec![Span::raw(display.clone())],
        };

        let badge = entry.badge();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(badge.to_string(), self.theme.badge_style(badge)));
        if entry.owned {
            spans.push(Span::styled(" · Owned", self.theme.card_label));
        }

        let line = Line::from(spans);
        if selected {
            line.style(self.theme.search_selected)
        } else {
            line
        }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!("Results ({})", self.entries.len()))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        self.state.last_height.set(height);

        if self.entries.is_empty() {
            Paragraph::new(NO_MATCHES).render(inner, buf);
            return;
        }

        let offset = self.state.offset(height);
        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, e)| self.row(e, i == self.state.selected))
            .collect();
        Paragraph::new(lines).render(inner, buf);

        if self.entries.len() > height {
            let mut sb = ScrollbarState::new(self.entries.len()).position(self.state.selected);
            Scrollbar::new(ScrollbarOrientation::VerticalRight).render(area, buf, &mut sb);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
