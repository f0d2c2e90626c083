//! UI layer
//!
//! Front ends over the session and query engine:
//!
//! - **`ratatui_adapter`** - the interactive terminal switcher
//! - **`output`** - user-facing messages for commands and the TUI status line
//!
//! Neither the query engine nor the session depends on anything here.

pub mod error;
pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
