//! Search bar widget for query input

use crate::session::Phase;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Placeholder shown while the query is empty
pub const PLACEHOLDER: &str = "Searching is easier...";

/// Search bar showing the query, a search/spinner glyph and a clear hint
pub struct SearchBar<'a> {
    query: &'a str,
    phase: Phase,
    /// Animation frame for the spinner
    frame: usize,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, phase: Phase, theme: &'a Theme) -> Self {
        Self {
            query,
            phase,
            frame: 0,
            theme,
        }
    }

    /// Set the spinner animation frame
    #[must_use]
    pub const fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.phase == Phase::Cleared {
            self.theme.border_style()
        } else {
            self.theme.accent_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let glyph = if self.phase.is_busy() {
            Span::styled(SPINNER[self.frame % SPINNER.len()], self.theme.accent_style())
        } else {
            Span::styled("⌕", self.theme.dimmed_style())
        };

        let mut spans = vec![glyph, Span::raw(" ")];
        if self.query.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, self.theme.dimmed_style()));
        } else {
            spans.push(Span::raw(self.query));
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::styled("  esc clear", self.theme.dimmed_style()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
