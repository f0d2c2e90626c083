//! Switcher session state machine
//!
//! # Phases
//!
//! ```text
//!             non-empty query              opening delay
//!  Cleared ─────────────────────► Opening ───────────────► Settled
//!     ▲                              │                       │
//!     │ empty query / clear          │ edit                  │ edit
//!     │ (from any phase)             ▼                       ▼
//!     └──────────────────────────  Typing ◄──────────────────┘
//!                                    │  ▲ edit (restart debounce)
//!                                    │  └──┘
//!                                    └──── typing debounce ──► Settled
//! ```
//!
//! Results are shown only in `Settled`. `Opening` and `Typing` show a
//! spinner. A single debounce timer drives both timed transitions.

use super::debounce::Debouncer;
use crate::catalog::{Group, Record};
use crate::filters::{FilterError, FilterSet, Tab, TabFilters};
use crate::search::{RankPolicy, evaluate};
use std::time::{Duration, Instant};

/// Transient phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No query; nothing shown
    #[default]
    Cleared,
    /// First keystroke after a clear; short reveal delay
    Opening,
    /// Query being edited; results hidden until input pauses
    Typing,
    /// Input has paused; results visible
    Settled,
}

impl Phase {
    /// Whether results should be shown
    #[must_use]
    pub const fn shows_results(self) -> bool {
        matches!(self, Self::Settled)
    }

    /// Whether a loading indicator should be shown
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Opening | Self::Typing)
    }
}

/// Delays for the two timed transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// `Opening` → `Settled`
    pub opening_delay: Duration,
    /// `Typing` → `Settled`, restarted on every edit
    pub typing_debounce: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            opening_delay: Duration::from_millis(50),
            typing_debounce: Duration::from_millis(1000),
        }
    }
}

/// One switcher instance: query, tab, filters, phase and its timer
///
/// A session is owned by a single front end and never shared.
#[derive(Debug)]
pub struct Session {
    query: String,
    view: TabFilters,
    phase: Phase,
    timer: Debouncer,
    timing: Timing,
}

impl Session {
    #[must_use]
    pub fn new(filters: FilterSet, timing: Timing) -> Self {
        Self {
            query: String::new(),
            view: TabFilters::new(filters),
            phase: Phase::Cleared,
            timer: Debouncer::new(),
            timing,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn view(&self) -> &TabFilters {
        &self.view
    }

    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.view.tab()
    }

    #[must_use]
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// Replace the query text
    ///
    /// An empty query clears the session. Otherwise a session coming from
    /// `Cleared` starts opening, and any other phase restarts typing.
    /// Setting the same text again is not an edit.
    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) -> Phase {
        let query = query.into();
        if query == self.query {
            return self.phase;
        }
        self.query = query;

        if self.query.is_empty() {
            self.timer.cancel();
            self.phase = Phase::Cleared;
            return self.phase;
        }

        self.phase = match self.phase {
            Phase::Cleared => {
                self.timer.schedule(now, self.timing.opening_delay);
                Phase::Opening
            }
            Phase::Opening | Phase::Typing | Phase::Settled => {
                self.timer.schedule(now, self.timing.typing_debounce);
                Phase::Typing
            }
        };
        self.phase
    }

    /// Explicit clear: reset the query and cancel any pending transition
    pub fn clear(&mut self) -> Phase {
        self.timer.cancel();
        self.query.clear();
        self.phase = Phase::Cleared;
        self.phase
    }

    /// Advance timed transitions
    ///
    /// Returns the new phase when the pending deadline fired.
    pub fn tick(&mut self, now: Instant) -> Option<Phase> {
        self.timer.poll(now)?;
        if self.phase.is_busy() {
            self.phase = Phase::Settled;
            Some(self.phase)
        } else {
            None
        }
    }

    /// Time until the next timed transition, if one is pending
    #[must_use]
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Activate a tab
    ///
    /// # Errors
    ///
    /// Returns `FilterError::GroupDisabled` if the tab's group is disabled.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), FilterError> {
        self.view.select(tab)
    }

    pub fn next_tab(&mut self) -> Tab {
        self.view.next_tab()
    }

    pub fn prev_tab(&mut self) -> Tab {
        self.view.prev_tab()
    }

    /// Flip a filter group; returns the new state
    pub fn toggle_filter(&mut self, group: Group) -> bool {
        self.view.toggle(group)
    }

    pub fn set_filter(&mut self, group: Group, enabled: bool) {
        self.view.set_enabled(group, enabled);
    }

    /// Evaluate the current query against `records`, whatever the phase
    #[must_use]
    pub fn results<'a>(&self, records: &'a [Record], policy: RankPolicy) -> Vec<&'a Record> {
        evaluate(
            records,
            &self.query,
            self.view.tab(),
            self.view.filters(),
            policy,
        )
    }

    /// Results to display, or `None` while nothing should be shown
    #[must_use]
    pub fn visible_results<'a>(
        &self,
        records: &'a [Record],
        policy: RankPolicy,
    ) -> Option<Vec<&'a Record>> {
        self.phase
            .shows_results()
            .then(|| self.results(records, policy))
    }

    /// Tear the session down, cancelling any pending transition
    ///
    /// Returns whether a transition was still pending.
    pub fn dispose(mut self) -> bool {
        self.timer.cancel()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FilterSet::default(), Timing::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_starts_cleared() {
        let session = Session::default();
        assert_eq!(session.phase(), Phase::Cleared);
        assert_eq!(session.query(), "");
        assert_eq!(session.until_next_tick(Instant::now()), None);
    }

    #[test]
    fn test_first_keystroke_opens_then_settles() {
        let t0 = Instant::now();
        let mut session = Session::default();

        assert_eq!(session.set_query("r", t0), Phase::Opening);
        assert_eq!(session.tick(t0 + ms(49)), None);
        assert_eq!(session.tick(t0 + ms(50)), Some(Phase::Settled));
        assert!(session.phase().shows_results());
    }

    #[test]
    fn test_edit_after_settled_types_then_settles() {
        let t0 = Instant::now();
        let mut session = Session::default();
        session.set_query("r", t0);
        session.tick(t0 + ms(50));

        assert_eq!(session.set_query("ra", t0 + ms(100)), Phase::Typing);
        assert!(session.phase().is_busy());
        assert_eq!(session.tick(t0 + ms(1099)), None);
        assert_eq!(session.tick(t0 + ms(1100)), Some(Phase::Settled));
    }

    #[test]
    fn test_edit_while_opening_switches_to_typing() {
        let t0 = Instant::now();
        let mut session = Session::default();
        session.set_query("r", t0);

        assert_eq!(session.set_query("ra", t0 + ms(10)), Phase::Typing);
        // Opening deadline was replaced by the typing debounce
        assert_eq!(session.tick(t0 + ms(60)), None);
        assert_eq!(session.tick(t0 + ms(1010)), Some(Phase::Settled));
    }

    #[test]
    fn test_each_edit_restarts_debounce() {
        let t0 = Instant::now();
        let mut session = Session::default();
        session.set_query("r", t0);
        session.tick(t0 + ms(50));

        session.set_query("ra", t0 + ms(100));
        session.set_query("ran", t0 + ms(900));
        assert_eq!(session.tick(t0 + ms(1100)), None);
        assert_eq!(session.phase(), Phase::Typing);
        assert_eq!(session.tick(t0 + ms(1900)), Some(Phase::Settled));
    }

    #[test]
    fn test_emptying_query_clears_and_cancels() {
        let t0 = Instant::now();
        let mut session = Session::default();
        session.set_query("r", t0);
        session.tick(t0 + ms(50));
        session.set_query("ra", t0 + ms(100));

        assert_eq!(session.set_query("", t0 + ms(200)), Phase::Cleared);
        assert_eq!(session.tick(t0 + ms(5000)), None);
        assert_eq!(session.phase(), Phase::Cleared);
    }

    #[test]
    fn test_clear_within_debounce_never_settles() {
        let t0 = Instant::now();
        let mut session = Session::default();
        session.set_query("rand", t0);

        assert_eq!(session.clear(), Phase::Cleared);
        assert_eq!(session.query(), "");
        for step in 0..30 {
            assert_eq!(session.tick(t0 + ms(step * 100)), None);
        }
        let catalog = Catalog::builtin();
        assert!(
            session
                .visible_results(catalog.records(), RankPolicy::default())
                .is_none()
        );
    }

    #[test]
    fn test_same_text_is_not_an_edit() {
        let t0 = Instant::now();
        let mut session = Session::default();
        session.set_query("r", t0);
        session.tick(t0 + ms(50));

        assert_eq!(session.set_query("r", t0 + ms(60)), Phase::Settled);
    }

    #[test]
    fn test_results_hidden_until_settled() {
        let t0 = Instant::now();
        let catalog = Catalog::builtin();
        let mut session = Session::default();
        session.set_query("rand", t0);

        assert!(session.visible_results(catalog.records(), RankPolicy::default()).is_none());
        session.tick(t0 + ms(50));

        let visible = session
            .visible_results(catalog.records(), RankPolicy::default())
            .unwrap();
        assert_eq!(visible[0].display_name, "Randall Johnsson");
    }

    #[test]
    fn test_tab_changes_keep_phase() {
        let t0 = Instant::now();
        let mut session = Session::default();
        session.set_query("r", t0);
        session.tick(t0 + ms(50));

        session.select_tab(Tab::Group(Group::Files)).unwrap();
        assert_eq!(session.phase(), Phase::Settled);

        session.toggle_filter(Group::Files);
        assert_eq!(session.tab(), Tab::All);
        assert_eq!(session.phase(), Phase::Settled);
    }

    #[test]
    fn test_custom_timing() {
        let t0 = Instant::now();
        let timing = Timing {
            opening_delay: ms(5),
            typing_debounce: ms(500),
        };
        let mut session = Session::new(FilterSet::default(), timing);

        session.set_query("k", t0);
        assert_eq!(session.until_next_tick(t0), Some(ms(5)));
        session.tick(t0 + ms(5));
        session.set_query("kr", t0 + ms(10));
        assert_eq!(session.until_next_tick(t0 + ms(10)), Some(ms(500)));
    }

    #[test]
    fn test_dispose_with_pending_timer() {
        let t0 = Instant::now();
        let mut session = Session::default();
        session.set_query("r", t0);
        assert!(session.until_next_tick(t0).is_some());
        assert!(session.dispose());
    }

    #[test]
    fn test_dispose_after_settling() {
        let t0 = Instant::now();
        let mut session = Session::default();
        session.set_query("r", t0);
        session.tick(t0 + Duration::from_secs(1));
        assert_eq!(session.phase(), Phase::Settled);
        assert!(!session.dispose());
        assert!(!Session::default().dispose());
    }
}
