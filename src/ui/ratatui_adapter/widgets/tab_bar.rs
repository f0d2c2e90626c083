//! Tab bar widget with per-tab record counts

use crate::filters::Tab;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct TabBar<'a> {
    /// Visible tabs and their counts, in display order
    tabs: &'a [(Tab, usize)],
    active: Tab,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    #[must_use]
    pub const fn new(tabs: &'a [(Tab, usize)], active: Tab, theme: &'a Theme) -> Self {
        Self {
            tabs,
            active,
            theme,
        }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (tab, count) in self.tabs {
            let style = if *tab == self.active {
                self.theme.accent_style()
            } else {
                self.theme.dimmed_style()
            };
            spans.push(Span::styled(format!(" {} {count} ", tab.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("F2 filters", self.theme.dimmed_style()));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
