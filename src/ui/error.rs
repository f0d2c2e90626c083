//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Result serialization failed
    #[error("Failed to render output: {0}")]
    RenderError(String),
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        Self::RenderError(err.to_string())
    }
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
