//! Color theme definitions for the ratatui TUI

use crate::catalog::Presence;
use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background of the row under the cursor
    pub selection_bg: Color,
    /// Foreground of the row under the cursor
    pub selection_fg: Color,
    /// Matched query text inside names
    pub match_highlight: Color,
    /// Focused borders, active tab and spinner
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub border: Color,
    /// Secondary text, inactive tabs, placeholders
    pub dimmed: Color,
    /// "Active now" status text
    pub online: Color,
    /// Record category badge
    pub category: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            match_highlight: Color::Yellow,
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            online: Color::Green,
            category: Color::Magenta,
        }
    }

    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn category_style(&self) -> Style {
        Style::default().fg(self.category)
    }

    /// Style for a record's status line
    #[must_use]
    pub fn presence_style(&self, presence: Presence) -> Style {
        match presence {
            Presence::Online => Style::default().fg(self.online),
            Presence::Recent | Presence::Offline => self.dimmed_style(),
        }
    }

    /// Style for a status bar message
    #[must_use]
    pub fn message_style(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => Style::default().fg(self.success),
            MessageLevel::Error => Style::default().fg(self.error),
            MessageLevel::Info => Style::default().fg(self.info),
            MessageLevel::Normal => Style::default(),
        }
    }
}
