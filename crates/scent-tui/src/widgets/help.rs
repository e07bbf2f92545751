//! Help popup — centred floating overlay listing keybindings and query
//! commands.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("Tab", "Cycle focus: results → search"),
    ("/", "Focus search"),
    ("Escape", "Return focus to results"),
    ("↑ k  /  ↓ j", "Move selection"),
    ("g  /  G", "First / last result"),
    ("PageUp / PageDown", "Scroll results by a page"),
    ("o  /  Alt+o", "Toggle owned only"),
    ("d  /  Alt+d", "Toggle dupes only"),
    ("x", "Clear search"),
    (":", "Command line (:help :theme :private :lock)"),
    ("?", "Toggle this help popup"),
];

const QUERIES: &[(&str, &str)] = &[
    ("dupes of <name>", "Dupes whose reference matches"),
    ("original <terms>", "Non-dupes only (also: og, real)"),
    ("house original", "The house's own compositions"),
    ("fresh citrus", "Every word must match; synonyms count"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

fn rows<'a>(pairs: &'a [(&'a str, &'a str)], key_style: Style) -> impl Iterator<Item = Line<'a>> {
    pairs.iter().map(move |(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {:<22}", key), key_style),
            Span::raw(*desc),
        ])
    })
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (BINDINGS.len() + QUERIES.len() + 4) as u16;
        let popup = centered_rect(72, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" scentfind — keys (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = Style::default().add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = rows(BINDINGS, key_style).collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("  Queries", self.theme.card_label)));
        lines.extend(rows(QUERIES, key_style));

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
