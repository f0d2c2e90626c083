//! Error types for tab and filter operations

use crate::catalog::Group;
use thiserror::Error;

/// Errors that can occur when changing tabs or filters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Tried to activate the tab of a disabled group
    #[error("The '{0}' filter is disabled")]
    GroupDisabled(Group),

    /// Tab name not recognised
    #[error("Unknown tab '{0}' (expected all, files, people, chats or lists)")]
    UnknownTab(String),
}
