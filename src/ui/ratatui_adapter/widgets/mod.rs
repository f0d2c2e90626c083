//! Ratatui widgets for the switcher TUI

mod result_list;
mod search_bar;
mod settings_panel;
mod status_bar;
mod tab_bar;

pub use result_list::ResultList;
pub use search_bar::{PLACEHOLDER, SearchBar};
pub use settings_panel::SettingsPanel;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
