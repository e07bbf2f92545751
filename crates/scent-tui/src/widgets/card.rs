//! Detail card — the selected result rendered in full on the right.
//!
//! Highlights only the literally typed terms, lists the notes that matched
//! the (expanded) query, and shows composition detail in private mode.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use regex::Regex;
use scent_core::highlight::spans_with;
use scent_core::session::SessionConfig;
use scent_core::view::{CardView, NO_MATCHES};
use scent_core::CatalogEntry;

pub struct DetailCard<'a> {
    entry: Option<&'a CatalogEntry>,
    session: SessionConfig,
    matched_notes: &'a [String],
    terms: Option<&'a Regex>,
    theme: &'a Theme,
}

impl<'a> DetailCard<'a> {
    pub fn new(
        entry: Option<&'a CatalogEntry>,
        session: SessionConfig,
        matched_notes: &'a [String],
        terms: Option<&'a Regex>,
        theme: &'a Theme,
    ) -> Self {
        Self { entry, session, matched_notes, terms, theme }
    }

    fn highlighted(&self, text: &str, base: Style) -> Vec<Span<'static>> {
        match self.terms {
            Some(re) => spans_with(re, text)
                .into_iter()
                .map(|s| {
                    let style = if s.hit { base.patch(self.theme.search_highlight) } else { base };
                    Span::styled(s.text.to_string(), style)
                })
                .collect(),
            None => vec![Span::styled(text.to_string(), base)],
        }
    }

    fn lines(&self, entry: &CatalogEntry) -> Vec<Line<'static>> {
        let card = CardView::build(&entry.record, &self.session);
        let badge = entry.badge();

        let mut lines = vec![
            Line::from(self.highlighted(&card.title, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(vec![
                Span::styled(card.badge.clone(), self.theme.badge_style(badge)),
                Span::raw(" · "),
                Span::raw(card.owned.clone()),
            ]),
            Line::default(),
        ];

        for (label, value) in card.rows() {
            let mut spans = vec![Span::styled(format!("{label}: "), self.theme.card_label)];
            if label == "Private" {
                spans.push(Span::styled(value, self.theme.card_private));
            } else {
                spans.extend(self.highlighted(&value, Style::default()));
            }
            lines.push(Line::from(spans));
        }

        if !self.matched_notes.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Matched notes: ", self.theme.card_label),
                Span::styled(self.matched_notes.join(", "), self.theme.card_matched_notes),
            ]));
        }
        lines
    }
}

impl Widget for DetailCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Details")
            .border_style(self.theme.border_unfocused);

        let body = match self.entry {
            Some(entry) => self.lines(entry),
            None => vec![Line::from(Span::styled(
                NO_MATCHES,
                Style::default().add_modifier(Modifier::DIM),
            ))],
        };

        Paragraph::new(body)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
