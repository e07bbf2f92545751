//! Status bar — one row under the panes.
//!
//! Left: match count and the similar-terms banner. Right: the last command
//! notice, else the catalog summary. A failed load takes over the whole row.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBar<'a> {
    summary: &'a str,
    banner: Option<&'a str>,
    right: &'a str,
    failed: bool,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        summary: &'a str,
        banner: Option<&'a str>,
        right: &'a str,
        failed: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { summary, banner, right, failed, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.failed {
            Paragraph::new(Line::from(Span::styled(self.right, self.theme.status_error)))
                .render(area, buf);
            return;
        }

        let right_width = (self.right.chars().count() as u16 + 1).min(area.width / 2);
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(right_width)])
            .split(area);

        let mut left = vec![Span::styled(self.summary, self.theme.status_normal)];
        if let Some(banner) = self.banner {
            left.push(Span::styled(" • ", self.theme.status_normal));
            left.push(Span::styled(banner, self.theme.status_banner));
        }
        Paragraph::new(Line::from(left)).render(chunks[0], buf);
        Paragraph::new(Line::from(Span::styled(self.right, self.theme.status_normal)).right_aligned())
            .render(chunks[1], buf);
    }
}
