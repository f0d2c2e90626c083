//! Query engine
//!
//! Filters the catalog by tab and filter set, ranks the survivors against
//! the query, and splits names into highlight segments for display.

mod engine;
mod highlight;

pub use engine::{MatchTier, RankPolicy, evaluate, match_tier, tab_counts};
pub use highlight::{Segment, highlight};
