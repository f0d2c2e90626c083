//! Status bar widget for messages and key hints

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const HINTS: [(&str, &str); 5] = [
    ("↑↓", "move"),
    ("tab", "switch tab"),
    ("enter", "open"),
    ("ctrl-y", "copy link"),
    ("esc", "clear/quit"),
];

/// Shows the latest status message, or key hints when there is none
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { message, theme }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.message {
            Some(message) => Line::from(Span::styled(
                format!("{}{}", Self::prefix_for_level(message.level), message.text),
                self.theme.message_style(message.level),
            )),
            None => Line::from(
                HINTS
                    .iter()
                    .flat_map(|(key, action)| {
                        [
                            Span::styled(*key, self.theme.accent_style()),
                            Span::styled(format!(" {action}  "), self.theme.dimmed_style()),
                        ]
                    })
                    .collect::<Vec<_>>(),
            ),
        };

        Paragraph::new(line).render(area, buf);
    }
}
