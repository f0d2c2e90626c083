//! Filter settings overlay

use crate::catalog::Group;
use crate::filters::FilterSet;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Panel listing each group with its toggle key and state
pub struct SettingsPanel<'a> {
    filters: &'a FilterSet,
    theme: &'a Theme,
}

impl<'a> SettingsPanel<'a> {
    #[must_use]
    pub const fn new(filters: &'a FilterSet, theme: &'a Theme) -> Self {
        Self { filters, theme }
    }

    /// Area for the panel in the top-right corner of `area`
    #[must_use]
    pub fn area(area: Rect) -> Rect {
        let width = area.width.min(24);
        let height = area.height.min(7);
        Rect::new(area.right().saturating_sub(width), area.y, width, height)
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(" Filters ");

        let lines: Vec<Line> = Group::ALL
            .iter()
            .enumerate()
            .map(|(i, group)| {
                let enabled = self.filters.is_enabled(*group);
                let (mark, style) = if enabled {
                    ("[x]", self.theme.accent_style())
                } else {
                    ("[ ]", self.theme.dimmed_style())
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), self.theme.dimmed_style()),
                    Span::styled(mark, style),
                    Span::raw(" "),
                    Span::styled(group.label(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
