//! Application state for the ratatui TUI
//!
//! Wraps a [`Session`] with the bits only a terminal front end needs:
//! cursor and scroll position, the settings panel, status messages and the
//! "copied" marker.

use crate::catalog::{Catalog, Group, Record};
use crate::search::RankPolicy;
use crate::session::{Phase, Session};
use crate::ui::output::{BufferedWriter, MessageLevel};
use std::time::{Duration, Instant};

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub const fn new(level: MessageLevel, text: String, created_at: Instant) -> Self {
        Self {
            level,
            text,
            created_at,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}

/// Application state for the switcher
#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    catalog: Catalog,
    pub policy: RankPolicy,
    /// Base URL for record links
    pub base_url: String,
    /// Cursor position in the visible results
    pub cursor: usize,
    /// First visible result row
    pub scroll_offset: usize,
    /// Height of the result area (set during render)
    pub visible_height: usize,
    /// Whether the filter settings panel is shown
    pub settings_open: bool,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    copied: Option<(String, Instant)>,
    /// How long the "copied" marker stays on a record
    pub copied_ttl: Duration,
    pub should_exit: bool,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, session: Session, policy: RankPolicy, base_url: String) -> Self {
        Self {
            session,
            catalog,
            policy,
            base_url,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 10,
            settings_open: false,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            copied: None,
            copied_ttl: Duration::from_secs(2),
            should_exit: false,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Results to draw; empty unless the session has settled
    #[must_use]
    pub fn results(&self) -> Vec<&Record> {
        self.session
            .visible_results(self.catalog.records(), self.policy)
            .unwrap_or_default()
    }

    /// Record under the cursor
    #[must_use]
    pub fn current_record(&self) -> Option<&Record> {
        self.results().get(self.cursor).copied()
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.results().len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.results().len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor inside the viewport
    fn adjust_scroll(&mut self) {
        let height = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Replace the query text
    pub fn set_query(&mut self, query: String, now: Instant) {
        self.session.set_query(query, now);
        self.reset_cursor();
    }

    pub fn query_push(&mut self, c: char, now: Instant) {
        let mut query = self.session.query().to_string();
        query.push(c);
        self.set_query(query, now);
    }

    pub fn query_backspace(&mut self, now: Instant) {
        let mut query = self.session.query().to_string();
        if query.pop().is_some() {
            self.set_query(query, now);
        }
    }

    /// Delete the last word of the query
    pub fn query_delete_word(&mut self, now: Instant) {
        let query = self.session.query();
        let trimmed = query.trim_end();
        let cut = trimmed.rfind(' ').map_or(0, |i| i + 1);
        let shortened = trimmed[..cut].to_string();
        self.set_query(shortened, now);
    }

    /// Clear the query and hide results
    pub fn clear(&mut self) {
        self.session.clear();
        self.reset_cursor();
    }

    pub fn next_tab(&mut self) {
        self.session.next_tab();
        self.reset_cursor();
    }

    pub fn prev_tab(&mut self) {
        self.session.prev_tab();
        self.reset_cursor();
    }

    /// Flip a filter group and report the change
    pub fn toggle_filter(&mut self, group: Group, now: Instant) {
        let enabled = self.session.toggle_filter(group);
        let state = if enabled { "on" } else { "off" };
        self.push_message(MessageLevel::Info, format!("{} {state}", group.label()), now);
        self.reset_cursor();
    }

    /// Advance timers: session transitions, message and marker expiry
    pub fn tick(&mut self, now: Instant) {
        if self.session.tick(now) == Some(Phase::Settled) {
            self.reset_cursor();
        }

        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(now, ttl));

        if let Some((_, at)) = &self.copied
            && now.saturating_duration_since(*at) >= self.copied_ttl
        {
            self.copied = None;
        }
    }

    /// How long the event loop may block before the next timed change
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.session
            .until_next_tick(now)
            .map_or(max, |remaining| remaining.min(max))
    }

    pub fn mark_copied(&mut self, id: &str, now: Instant) {
        self.copied = Some((id.to_string(), now));
    }

    #[must_use]
    pub fn is_copied(&self, id: &str) -> bool {
        self.copied.as_ref().is_some_and(|(copied, _)| copied == id)
    }

    pub fn push_message(&mut self, level: MessageLevel, text: String, now: Instant) {
        self.messages.push(StatusMessage::new(level, text, now));
    }

    /// Move buffered output into the status line
    pub fn absorb(&mut self, output: &BufferedWriter, now: Instant) {
        for (level, text) in output.drain() {
            self.push_message(level, text, now);
        }
    }

    #[must_use]
    pub fn latest_message(&self) -> Option<&StatusMessage> {
        self.messages.last()
    }
}
