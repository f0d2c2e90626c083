//! Ratatui-based switcher
//!
//! Draws the search bar, tab bar, results and status line, and runs the
//! event loop. The loop blocks on input for at most the time left on the
//! session's debounce, so timed transitions land on schedule.

use super::events::{EventResult, poll_and_handle};
use super::state::AppState;
use super::theme::Theme;
use super::widgets::{PLACEHOLDER, ResultList, SearchBar, SettingsPanel, StatusBar, TabBar};
use crate::actions::{ActionOutcome, Clipboard, SystemClipboard, copy_link, open_link};
use crate::search::tab_counts;
use crate::session::Phase;
use crate::ui::error::Result;
use crate::ui::output::{BufferedWriter, report};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Longest the loop blocks on input; also the spinner frame rate
const MAX_POLL: Duration = Duration::from_millis(100);

/// Interactive switcher
pub struct Switcher<C: Clipboard = SystemClipboard> {
    theme: Theme,
    clipboard: C,
}

impl Switcher<SystemClipboard> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clipboard(SystemClipboard)
    }
}

impl Default for Switcher<SystemClipboard> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clipboard> Switcher<C> {
    /// Create a switcher that copies into `clipboard`
    #[must_use]
    pub fn with_clipboard(clipboard: C) -> Self {
        Self {
            theme: Theme::default(),
            clipboard,
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the switcher until the user leaves
    ///
    /// The session is disposed on exit, cancelling any pending transition.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up, drawn to, or polled.
    pub fn run(&mut self, mut state: AppState) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, &mut state);

        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }
        state.session.dispose();
        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        let output = BufferedWriter::new();
        let mut frame_no: usize = 0;

        while !state.should_exit {
            state.tick(Instant::now());

            terminal.draw(|frame| render(frame, state, &self.theme, frame_no))?;
            frame_no = frame_no.wrapping_add(1);

            let timeout = state.poll_timeout(Instant::now(), MAX_POLL);
            match poll_and_handle(state, timeout)? {
                EventResult::Exit => state.should_exit = true,
                EventResult::CopyLink => {
                    if let Some(outcome) = self.copy_current(state) {
                        report(&output, &outcome);
                    }
                }
                EventResult::OpenLink => {
                    if let Some(record) = state.current_record() {
                        report(&output, &open_link(record, &state.base_url));
                    }
                }
                EventResult::Continue | EventResult::Ignored => {}
            }

            state.absorb(&output, Instant::now());
        }

        Ok(())
    }

    fn copy_current(&mut self, state: &mut AppState) -> Option<ActionOutcome> {
        let record = state.current_record()?.clone();
        let outcome = copy_link(&mut self.clipboard, &record, &state.base_url);
        if outcome.is_success() {
            state.mark_copied(&record.id, Instant::now());
        }
        Some(outcome)
    }
}

fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme, frame_no: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let phase = state.session.phase();
    frame.render_widget(
        SearchBar::new(state.session.query(), phase, theme).frame(frame_no),
        chunks[0],
    );

    let counts = tab_counts(state.catalog().records(), state.session.view().filters());
    frame.render_widget(TabBar::new(&counts, state.session.tab(), theme), chunks[1]);

    render_body(frame, state, theme, chunks[2]);

    frame.render_widget(StatusBar::new(state.latest_message(), theme), chunks[3]);

    if state.settings_open {
        let filters = *state.session.view().filters();
        frame.render_widget(
            SettingsPanel::new(&filters, theme),
            SettingsPanel::area(frame.area()),
        );
    }
}

fn render_body(frame: &mut Frame, state: &mut AppState, theme: &Theme, area: Rect) {
    // Two lines per record, minus the border
    state.visible_height = usize::from(area.height.saturating_sub(2) / 2).max(1);

    let placeholder = match state.session.phase() {
        Phase::Settled => None,
        Phase::Cleared => Some(format!(
            "{PLACEHOLDER}  ({} records)",
            state.catalog().len()
        )),
        Phase::Opening | Phase::Typing => Some("Searching...".to_string()),
    };

    if let Some(text) = placeholder {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style());
        frame.render_widget(
            Paragraph::new(Line::styled(text, theme.dimmed_style())).block(block),
            area,
        );
        return;
    }

    let results = state.results();
    frame.render_widget(ResultList::new(state, &results, theme), area);
}
