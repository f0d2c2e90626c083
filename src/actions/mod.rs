//! Record actions (copy link, open link)
//!
//! Actions never return errors. A failure is reported as
//! [`ActionOutcome::Failed`] for the front end to display; the query engine
//! and the session never see it.

mod link;

pub use link::{DEFAULT_BASE_URL, resolve_target};

use crate::catalog::Record;

/// Result of running an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Action completed; carries a short description
    Success(String),
    /// Action failed; carries the reason
    Failed(String),
}

impl ActionOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Message for the status line
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Failed(msg) => msg,
        }
    }
}

/// Destination for copied text
pub trait Clipboard {
    /// Replace the clipboard contents
    ///
    /// # Errors
    ///
    /// Returns a description of the failure if the clipboard is unavailable
    /// or rejects the text.
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard via `arboard`
///
/// The clipboard handle is opened per copy, so a missing display server only
/// affects the copy that needed it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
        clipboard
            .set_text(text)
            .map_err(|e| format!("Clipboard error: {e}"))
    }
}

/// Copy a record's target link to the clipboard
#[must_use]
pub fn copy_link(clipboard: &mut impl Clipboard, record: &Record, base_url: &str) -> ActionOutcome {
    let target = resolve_target(record, base_url);
    match clipboard.set_text(&target) {
        Ok(()) => ActionOutcome::Success(format!("Copied link to {}", record.display_name)),
        Err(e) => ActionOutcome::Failed(format!("Failed to copy link: {e}")),
    }
}

/// Open a record's target link with the system handler
#[must_use]
pub fn open_link(record: &Record, base_url: &str) -> ActionOutcome {
    let target = resolve_target(record, base_url);
    match open::that(&target) {
        Ok(()) => ActionOutcome::Success(format!("Opened {target}")),
        Err(e) => ActionOutcome::Failed(format!("Failed to open {target}: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::testing::FakeClipboard;

    #[test]
    fn test_copy_link_success() {
        let mut clipboard = FakeClipboard::default();
        let record = Record::new("3", Category::File, "notes.md");

        let outcome = copy_link(&mut clipboard, &record, DEFAULT_BASE_URL);
        assert!(outcome.is_success());
        assert_eq!(
            clipboard.contents.as_deref(),
            Some("https://example.com/files/notes.md")
        );
    }

    #[test]
    fn test_copy_link_failure_is_an_outcome() {
        let mut clipboard = FakeClipboard::broken("no display");
        let record = Record::new("3", Category::File, "notes.md");

        let outcome = copy_link(&mut clipboard, &record, DEFAULT_BASE_URL);
        assert!(!outcome.is_success());
        assert!(outcome.message().contains("no display"));
        assert!(clipboard.contents.is_none());
    }
}
