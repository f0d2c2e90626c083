//! Error types for catalog loading and validation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share an id
    #[error("Duplicate record id '{0}'")]
    DuplicateId(String),

    /// A record has an empty or whitespace-only name
    #[error("Record '{0}' has an empty name")]
    EmptyName(String),

    /// No record with the requested id
    #[error("No record with id '{0}'")]
    NotFound(String),

    /// Catalog file could not be read
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog file is not valid TOML or has the wrong shape
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
