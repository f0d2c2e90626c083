//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to state changes. Actions with side
//! effects (clipboard, browser) are returned to the run loop instead of
//! being performed here.

use super::state::AppState;
use crate::catalog::Group;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Copy the link of the record under the cursor
    CopyLink,
    /// Open the link of the record under the cursor
    OpenLink,
    /// Leave the switcher
    Exit,
    /// No action taken
    Ignored,
}

/// Group toggled by a digit key in the settings panel
const fn group_for_key(c: char) -> Option<Group> {
    match c {
        '1' => Some(Group::Files),
        '2' => Some(Group::People),
        '3' => Some(Group::Chats),
        '4' => Some(Group::Lists),
        _ => None,
    }
}

/// Handle a key press
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> EventResult {
    if state.settings_open
        && let Some(result) = handle_settings_key(state, key, now)
    {
        return result;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Exit,
        (KeyCode::Esc, _) => {
            if state.session.query().is_empty() {
                EventResult::Exit
            } else {
                state.clear();
                EventResult::Continue
            }
        }

        (KeyCode::Enter, _) | (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
            if state.current_record().is_some() {
                EventResult::OpenLink
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            if state.current_record().is_some() {
                EventResult::CopyLink
            } else {
                EventResult::Ignored
            }
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Tabs and settings
        (KeyCode::Tab, _) => {
            state.next_tab();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.prev_tab();
            EventResult::Continue
        }
        (KeyCode::F(2), _) => {
            state.settings_open = !state.settings_open;
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.clear();
            EventResult::Continue
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word(now);
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c, now);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.session.query().is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace(now);
                EventResult::Continue
            }
        }

        _ => EventResult::Ignored,
    }
}

/// Keys that mean something only while the settings panel is open
fn handle_settings_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Option<EventResult> {
    match key.code {
        KeyCode::Esc => {
            state.settings_open = false;
            Some(EventResult::Continue)
        }
        KeyCode::Char(c) => {
            let group = group_for_key(c)?;
            state.toggle_filter(group, now);
            Some(EventResult::Continue)
        }
        _ => None,
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let now = Instant::now();
    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key, now),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterSet, Tab};
    use crate::search::RankPolicy;
    use crate::session::{Phase, Session, Timing};
    use crate::testing::mixed_catalog;

    fn make_state() -> AppState {
        AppState::new(
            mixed_catalog(),
            Session::new(FilterSet::default(), Timing::default()),
            RankPolicy::default(),
            "https://example.com".to_string(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_query() {
        let now = Instant::now();
        let mut state = make_state();

        assert_eq!(handle_key(&mut state, key(KeyCode::Char('r')), now), EventResult::Continue);
        assert_eq!(
            handle_key(&mut state, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT), now),
            EventResult::Continue
        );
        assert_eq!(state.session.query(), "rA");
        assert_eq!(state.session.phase(), Phase::Typing);
    }

    #[test]
    fn test_escape_clears_then_exits() {
        let now = Instant::now();
        let mut state = make_state();
        handle_key(&mut state, key(KeyCode::Char('r')), now);

        assert_eq!(handle_key(&mut state, key(KeyCode::Esc), now), EventResult::Continue);
        assert_eq!(state.session.phase(), Phase::Cleared);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc), now), EventResult::Exit);
    }

    #[test]
    fn test_ctrl_c_exits() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, ctrl('c'), Instant::now()), EventResult::Exit);
    }

    #[test]
    fn test_actions_need_a_record() {
        let now = Instant::now();
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, ctrl('y'), now), EventResult::Ignored);
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter), now), EventResult::Ignored);

        state.set_query("rand".to_string(), now);
        state.tick(now + Duration::from_secs(1));
        assert_eq!(handle_key(&mut state, ctrl('y'), now), EventResult::CopyLink);
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter), now), EventResult::OpenLink);
    }

    #[test]
    fn test_tab_cycles_visible_tabs() {
        let now = Instant::now();
        let mut state = make_state();
        handle_key(&mut state, key(KeyCode::Tab), now);
        assert_eq!(state.session.tab(), Tab::Group(Group::Files));
        handle_key(&mut state, key(KeyCode::BackTab), now);
        assert_eq!(state.session.tab(), Tab::All);
    }

    #[test]
    fn test_settings_digits_toggle_filters() {
        let now = Instant::now();
        let mut state = make_state();
        handle_key(&mut state, key(KeyCode::F(2)), now);
        assert!(state.settings_open);

        handle_key(&mut state, key(KeyCode::Char('3')), now);
        assert!(state.session.view().filters().is_enabled(Group::Chats));
        assert_eq!(state.session.query(), "");

        handle_key(&mut state, key(KeyCode::Esc), now);
        assert!(!state.settings_open);
    }

    #[test]
    fn test_digits_type_when_settings_closed() {
        let now = Instant::now();
        let mut state = make_state();
        handle_key(&mut state, key(KeyCode::Char('3')), now);
        assert_eq!(state.session.query(), "3");
    }

    #[test]
    fn test_backspace_on_empty_is_ignored() {
        let mut state = make_state();
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Backspace), Instant::now()),
            EventResult::Ignored
        );
    }
}
