//! Filter set and tab types
//!
//! - `FilterSet`: which category groups are enabled
//! - `Tab`: the active category tab (`all` or a single group)
//! - `TabFilters`: a tab and a filter set kept consistent with each other

use super::error::FilterError;
use crate::catalog::{Group, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enabled/disabled state for every category group
///
/// Serialized as a flat table so it can live in the config file:
///
/// ```toml
/// [filters]
/// files = true
/// people = true
/// chats = false
/// lists = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub files: bool,
    pub people: bool,
    pub chats: bool,
    pub lists: bool,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            files: true,
            people: true,
            chats: false,
            lists: false,
        }
    }
}

impl FilterSet {
    /// Filter set with every group enabled
    #[must_use]
    pub const fn all_enabled() -> Self {
        Self {
            files: true,
            people: true,
            chats: true,
            lists: true,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self, group: Group) -> bool {
        match group {
            Group::Files => self.files,
            Group::People => self.people,
            Group::Chats => self.chats,
            Group::Lists => self.lists,
        }
    }

    pub const fn set(&mut self, group: Group, enabled: bool) {
        let slot = match group {
            Group::Files => &mut self.files,
            Group::People => &mut self.people,
            Group::Chats => &mut self.chats,
            Group::Lists => &mut self.lists,
        };
        *slot = enabled;
    }

    /// Flip a group and return its new state
    pub const fn toggle(&mut self, group: Group) -> bool {
        let enabled = !self.is_enabled(group);
        self.set(group, enabled);
        enabled
    }

    /// Enabled groups in tab-bar order
    pub fn enabled_groups(&self) -> impl Iterator<Item = Group> + '_ {
        Group::ALL.into_iter().filter(|g| self.is_enabled(*g))
    }

    /// Whether a record's group is enabled
    #[must_use]
    pub const fn admits(&self, record: &Record) -> bool {
        self.is_enabled(record.group())
    }
}

/// Active category tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Every enabled group
    #[default]
    All,
    /// A single group, regardless of the filter set
    Group(Group),
}

impl Tab {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Group(group) => group.label(),
        }
    }

    #[must_use]
    pub const fn group(self) -> Option<Group> {
        match self {
            Self::All => None,
            Self::Group(group) => Some(group),
        }
    }

    /// Category filter for a single record
    ///
    /// A group tab shows its own records whatever the filter set says; `All`
    /// shows every record whose group is enabled.
    #[must_use]
    pub fn admits(self, filters: &FilterSet, record: &Record) -> bool {
        match self {
            Self::Group(group) => group.contains(record.category),
            Self::All => filters.admits(record),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Group(group) => write!(f, "{group}"),
        }
    }
}

impl FromStr for Tab {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "files" | "file" => Ok(Self::Group(Group::Files)),
            "people" | "person" => Ok(Self::Group(Group::People)),
            "chats" | "chat" => Ok(Self::Group(Group::Chats)),
            "lists" | "list" => Ok(Self::Group(Group::Lists)),
            _ => Err(FilterError::UnknownTab(s.to_string())),
        }
    }
}

/// Active tab plus filter set
///
/// The active tab is always `All` or a group that is enabled in the filter
/// set. Every mutation goes through this type so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabFilters {
    tab: Tab,
    filters: FilterSet,
}

impl TabFilters {
    /// Start on the `All` tab with the given filter set
    #[must_use]
    pub const fn new(filters: FilterSet) -> Self {
        Self {
            tab: Tab::All,
            filters,
        }
    }

    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Activate a tab
    ///
    /// # Errors
    ///
    /// Returns `FilterError::GroupDisabled` if the tab's group is disabled;
    /// the active tab is left unchanged.
    pub fn select(&mut self, tab: Tab) -> Result<(), FilterError> {
        if let Tab::Group(group) = tab
            && !self.filters.is_enabled(group)
        {
            return Err(FilterError::GroupDisabled(group));
        }
        self.tab = tab;
        Ok(())
    }

    /// Enable or disable a group
    ///
    /// Disabling the group behind the active tab moves the tab back to `All`.
    pub fn set_enabled(&mut self, group: Group, enabled: bool) {
        self.filters.set(group, enabled);
        if !enabled && self.tab == Tab::Group(group) {
            self.tab = Tab::All;
        }
    }

    /// Flip a group, returning its new state
    pub fn toggle(&mut self, group: Group) -> bool {
        let enabled = !self.filters.is_enabled(group);
        self.set_enabled(group, enabled);
        enabled
    }

    /// Tabs currently shown: `All` then every enabled group
    #[must_use]
    pub fn visible_tabs(&self) -> Vec<Tab> {
        std::iter::once(Tab::All)
            .chain(self.filters.enabled_groups().map(Tab::Group))
            .collect()
    }

    /// Move to the next visible tab, wrapping around
    pub fn next_tab(&mut self) -> Tab {
        self.step(true)
    }

    /// Move to the previous visible tab, wrapping around
    pub fn prev_tab(&mut self) -> Tab {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> Tab {
        let tabs = self.visible_tabs();
        let len = tabs.len();
        let current = tabs.iter().position(|t| *t == self.tab).unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.tab = tabs[next];
        self.tab
    }

    /// Category filter for a single record under the active tab
    #[must_use]
    pub fn accepts(&self, record: &Record) -> bool {
        self.tab.admits(&self.filters, record)
    }
}
