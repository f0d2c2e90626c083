//! Record catalog
//!
//! The catalog is the fixed, ordered set of records the switcher searches.
//! It is built once at startup, either from the built-in demo set or from a
//! TOML file, and never changes afterwards.
//!
//! # File format
//!
//! ```toml
//! [[records]]
//! id = "1"
//! category = "person"
//! name = "Randall Johnsson"
//! status = "Active now"
//!
//! [[records]]
//! id = "2"
//! category = "folder"
//! name = "Random Michael Folder"
//! details = "12 Files • in Photos • Edited 12m ago"
//! ```

mod error;
mod types;

pub use error::CatalogError;
pub use types::{Category, Group, Presence, Record};

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Immutable, validated record set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    records: Vec<Record>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two records share an id and
    /// `CatalogError::EmptyName` if a record has a blank name.
    pub fn new(records: Vec<Record>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.display_name.trim().is_empty() {
                return Err(CatalogError::EmptyName(record.id.clone()));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Parse a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` on malformed input, or a validation error.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::new(file.records)
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_toml`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// The demo record set shipped with the switcher
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            records: builtin_records(),
        }
    }

    /// All records in catalog order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Look up a record by id, failing if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no record has this id.
    pub fn require(&self, id: &str) -> Result<&Record, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_records() -> Vec<Record> {
    vec![
        Record::new("1", Category::Person, "Randall Johnsson")
            .with_status("Active now")
            .with_avatar("https://img.freepik.com/premium-photo/happy-man-ai-generated-portrait-user-profile_1119669-1.jpg?w=2000"),
        Record::new("2", Category::Folder, "Random Michael Folder")
            .with_details("12 Files • in Photos • Edited 12m ago"),
        Record::new("3", Category::File, "crative_file_frandkies.jpg")
            .with_details("in Photos/Assets • Edited 12m ago"),
        Record::new("4", Category::Person, "Kristinge Karand")
            .with_status("Active 2d ago")
            .with_avatar("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=40&h=40&fit=crop&crop=face"),
        Record::new("5", Category::File, "files_krande_michelle.avi")
            .with_details("in Videos • Added 12m ago"),
        Record::new("6", Category::Person, "Anurag MK")
            .with_details("Active 2d ago")
            .with_avatar("https://imgv3.fotor.com/images/gallery/Realistic-Male-Profile-Picture.jpg"),
        Record::new("7", Category::File, "files_krande_michelle.avi")
            .with_details("in Videos • Added 12m ago"),
    ]
}
