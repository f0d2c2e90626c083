//! Seekr - a quick switcher for people, files, chats and lists
//!
//! This library ranks a catalog of records against a typed query, keeps the
//! category tabs and filters consistent, and drives the search session
//! through its debounced phases. A ratatui front end and a scripting CLI sit
//! on top.

use thiserror::Error;

pub mod actions;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod filters;
pub mod output;
pub mod search;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SeekrError {
    /// Catalog loading or lookup error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Tab or filter error
    #[error("Filter error: {0}")]
    Filter(#[from] filters::FilterError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
}
