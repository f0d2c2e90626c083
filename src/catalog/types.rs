//! Record and category types
//!
//! A `Record` is one entry in the switcher: a person, a file, a folder, a chat
//! or a list. Records are immutable once the catalog is built.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Person,
    File,
    Folder,
    Chat,
    List,
}

impl Category {
    /// Filter group this category belongs to
    #[must_use]
    pub const fn group(self) -> Group {
        match self {
            Self::Person => Group::People,
            Self::File | Self::Folder => Group::Files,
            Self::Chat => Group::Chats,
            Self::List => Group::Lists,
        }
    }

    /// Lowercase name, as used in links and catalog files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::File => "file",
            Self::Folder => "folder",
            Self::Chat => "chat",
            Self::List => "list",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category group that can be toggled on or off as a whole
///
/// `Files` covers both files and folders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Files,
    People,
    Chats,
    Lists,
}

impl Group {
    /// All groups in tab-bar order
    pub const ALL: [Self; 4] = [Self::Files, Self::People, Self::Chats, Self::Lists];

    /// Whether `category` is part of this group
    #[must_use]
    pub fn contains(self, category: Category) -> bool {
        category.group() == self
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Files => "Files",
            Self::People => "People",
            Self::Chats => "Chats",
            Self::Lists => "Lists",
        }
    }

    /// Lowercase key used on the command line and in config files
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::People => "people",
            Self::Chats => "chats",
            Self::Lists => "lists",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Online status derived from a record's status text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Currently active ("Active now")
    Online,
    /// Active at some point ("Active 2d ago")
    Recent,
    /// No status, or nothing that mentions activity
    Offline,
}

/// A single searchable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub category: Category,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default, rename = "status", skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(default, rename = "details", skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
    #[serde(default, rename = "avatar", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Record {
    /// Create a record with only the required fields set
    #[must_use]
    pub fn new(id: impl Into<String>, category: Category, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            display_name: display_name.into(),
            status_text: None,
            secondary_text: None,
            avatar_url: None,
        }
    }

    /// Set the status line (e.g. "Active now")
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status_text = Some(status.into());
        self
    }

    /// Set the secondary line (e.g. "in Videos • Added 12m ago")
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.secondary_text = Some(details.into());
        self
    }

    /// Set the avatar URL
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Group of this record's category
    #[must_use]
    pub const fn group(&self) -> Group {
        self.category.group()
    }

    /// Text shown under the name: status first, then details
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.status_text
            .as_deref()
            .or(self.secondary_text.as_deref())
    }

    /// Classify the status text
    #[must_use]
    pub fn presence(&self) -> Presence {
        match self.status_text.as_deref() {
            Some(status) if status.contains("Active now") => Presence::Online,
            Some(status) if status.contains("Active") => Presence::Recent,
            _ => Presence::Offline,
        }
    }
}
