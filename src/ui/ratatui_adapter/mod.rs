//! Ratatui-based switcher front end
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Switcher                      │
//! │   (event loop, terminal setup, actions)     │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ (session)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Keys
//!
//! - typing edits the query; `esc` clears it, or quits when already empty
//! - `↑`/`↓`, `home`/`end` move the cursor
//! - `tab`/`shift-tab` cycle the visible tabs
//! - `enter` opens the record's link, `ctrl-y` copies it
//! - `F2` opens the filter panel; `1`-`4` toggle files, people, chats, lists

mod events;
mod state;
mod switcher;
mod theme;
pub mod widgets;

pub use events::{EventResult, handle_key};
pub use state::{AppState, StatusMessage};
pub use switcher::Switcher;
pub use theme::Theme;
