//! Switcher sessions
//!
//! A [`Session`] holds the query, the active tab and filter set, and the
//! transient [`Phase`] driven by edits and a single [`Debouncer`].
//!
//! # Examples
//!
//! ```
//! use seekr::session::{Phase, Session};
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut session = Session::default();
//!
//! assert_eq!(session.set_query("ra", start), Phase::Opening);
//! assert_eq!(session.tick(start + Duration::from_millis(50)), Some(Phase::Settled));
//! ```

mod debounce;
mod state;

pub use debounce::{Debouncer, Ticket};
pub use state::{Phase, Session, Timing};
