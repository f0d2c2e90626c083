//! Output abstraction layer
//!
//! User-facing messages go through [`OutputWriter`], so commands can write
//! to the terminal while the TUI routes the same messages to its status line.

use crate::actions::ActionOutcome;
use colored::Colorize;
use std::cell::RefCell;

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Plain result output
    Normal,
    /// Something failed
    Error,
    /// Something completed
    Success,
    /// Secondary, dimmed text
    Info,
}

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use seekr::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("https://example.com/files/notes.md");
/// output.success("Copied link");
/// output.error("Clipboard unavailable");
/// ```
pub trait OutputWriter {
    /// Emit a message at the given level
    fn emit(&self, level: MessageLevel, message: &str);

    fn write(&self, message: &str) {
        self.emit(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.emit(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.emit(MessageLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.emit(MessageLevel::Info, message);
    }
}

/// CLI implementation: coloured messages on stdout, errors on stderr
///
/// In quiet mode only results (`write`) and errors are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl OutputWriter for StdoutWriter {
    fn emit(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Normal => println!("{message}"),
            MessageLevel::Error => eprintln!("{} {}", "❌".red(), message),
            MessageLevel::Success if !self.quiet => println!("{} {}", "✓".green(), message),
            MessageLevel::Info if !self.quiet => println!("{}", message.dimmed()),
            MessageLevel::Success | MessageLevel::Info => {}
        }
    }
}

/// Collects messages instead of printing them
///
/// Used by the TUI, which drains the buffer into its status line, and by tests.
#[derive(Debug, Default)]
pub struct BufferedWriter {
    messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl BufferedWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered message, oldest first
    pub fn drain(&self) -> Vec<(MessageLevel, String)> {
        self.messages.take()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl OutputWriter for BufferedWriter {
    fn emit(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

/// Report an action outcome at the matching level
pub fn report(output: &impl OutputWriter, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Success(msg) => output.success(msg),
        ActionOutcome::Failed(msg) => output.error(msg),
    }
}
