//! Category filters and tabs
//!
//! Records are grouped into four toggleable groups (files, people, chats,
//! lists). The active tab narrows the view to one group, or shows every
//! enabled group on the `all` tab.
//!
//! # Examples
//!
//! ```
//! use seekr::catalog::Group;
//! use seekr::filters::{FilterSet, Tab, TabFilters};
//!
//! let mut state = TabFilters::new(FilterSet::default());
//! state.select(Tab::Group(Group::Files)).unwrap();
//!
//! // Turning off the group behind the active tab falls back to `all`
//! state.toggle(Group::Files);
//! assert_eq!(state.tab(), Tab::All);
//! ```

mod error;
mod types;

pub use error::FilterError;
pub use types::{FilterSet, Tab, TabFilters};
