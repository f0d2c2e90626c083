//! Result list widget with query highlighting

use crate::catalog::Record;
use crate::search::highlight;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Ranked records, two lines each: name and subtitle
pub struct ResultList<'a> {
    state: &'a AppState,
    results: &'a [&'a Record],
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    #[must_use]
    pub const fn new(state: &'a AppState, results: &'a [&'a Record], theme: &'a Theme) -> Self {
        Self {
            state,
            results,
            theme,
        }
    }

    fn render_record(&self, record: &'a Record, is_cursor: bool) -> ListItem<'a> {
        let query = self.state.session.query();

        let mut name_spans = vec![
            Span::styled(if is_cursor { "> " } else { "  " }, self.theme.accent_style()),
            Span::styled(format!("{:<7}", record.category.as_str()), self.theme.category_style()),
        ];
        name_spans.extend(highlight(&record.display_name, query).into_iter().map(|segment| {
            if segment.matched {
                Span::styled(segment.text, self.theme.match_style())
            } else {
                Span::raw(segment.text)
            }
        }));
        if self.state.is_copied(&record.id) {
            name_spans.push(Span::styled(
                "  ✓ copied",
                self.theme.message_style(MessageLevel::Success),
            ));
        }

        let mut lines = vec![Line::from(name_spans)];
        if let Some(subtitle) = record.subtitle() {
            lines.push(Line::from(vec![
                Span::raw("         "),
                Span::styled(subtitle, self.theme.presence_style(record.presence())),
            ]));
        }

        let item = ListItem::new(lines);
        if is_cursor {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" Results ({}) ", self.results.len()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let start = self.state.scroll_offset.min(self.results.len());
        let items: Vec<ListItem> = self.results[start..]
            .iter()
            .enumerate()
            .map(|(offset, &record)| self.render_record(record, start + offset == self.state.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
