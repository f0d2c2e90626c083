//! Testing utilities for seekr
//!
//! Fixtures shared by the unit tests: a fake clipboard and a catalog that
//! covers every category.
//!
//! Only available when compiled with `cfg(test)`.

use crate::actions::Clipboard;
use crate::catalog::{Catalog, Category, Record};

/// In-memory clipboard that records the last copied text
///
/// A broken clipboard fails every copy with the given reason.
#[derive(Debug, Default)]
pub struct FakeClipboard {
    pub contents: Option<String>,
    failure: Option<String>,
}

impl FakeClipboard {
    /// Clipboard that rejects every copy
    pub fn broken(reason: &str) -> Self {
        Self {
            contents: None,
            failure: Some(reason.to_string()),
        }
    }
}

impl Clipboard for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if let Some(reason) = &self.failure {
            return Err(reason.clone());
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Catalog with one or more records of every category
///
/// # Panics
/// Panics if the fixture records are invalid.
pub fn mixed_catalog() -> Catalog {
    Catalog::new(vec![
        Record::new("p1", Category::Person, "Randall Johnsson").with_status("Active now"),
        Record::new("f1", Category::Folder, "Random Michael Folder"),
        Record::new("f2", Category::File, "rand.txt"),
        Record::new("c1", Category::Chat, "Random chat"),
        Record::new("l1", Category::List, "Reading list"),
        Record::new("p2", Category::Person, "Anurag MK").with_status("Active 2d ago"),
    ])
    .expect("fixture catalog is valid")
}
