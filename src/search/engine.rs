//! Category filtering and match-tier ranking
//!
//! Evaluation runs in two stages:
//!
//! 1. **Category filter**: the active tab (or, on `all`, the filter set)
//!    decides which records are candidates. Catalog order is kept.
//! 2. **Ranking**: with a non-blank query, candidates are ordered by match
//!    tier (exact, prefix, contains, none) and then by lowercased name.
//!    Equal keys keep their stage-1 order.

use crate::catalog::Record;
use crate::filters::{FilterSet, Tab};
use serde::{Deserialize, Serialize};

/// How strongly a name matches a query, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Name equals the query
    Exact,
    /// Name starts with the query
    Prefix,
    /// Query occurs somewhere in the name
    Contains,
    /// No match
    None,
}

/// Ranking knobs
///
/// The defaults keep every candidate visible and only reorder them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankPolicy {
    /// Treat substring matches as their own tier; when off they rank as `None`
    pub include_contains: bool,
    /// Remove candidates that do not match at all
    pub drop_unmatched: bool,
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self {
            include_contains: true,
            drop_unmatched: false,
        }
    }
}

/// Match tier of `name` against `query`, both compared case-insensitively
///
/// The query is trimmed first. A blank query matches nothing.
///
/// # Examples
///
/// ```
/// use seekr::search::{MatchTier, match_tier};
///
/// assert_eq!(match_tier("Randall Johnsson", "rand"), MatchTier::Prefix);
/// assert_eq!(match_tier("Anurag MK", "MK"), MatchTier::Contains);
/// ```
#[must_use]
pub fn match_tier(name: &str, query: &str) -> MatchTier {
    let needle = fold_case(query.trim());
    if needle.is_empty() {
        return MatchTier::None;
    }
    tier_of(&fold_case(name), &needle)
}

/// Lowercase `text` one character at a time
///
/// Ranking and highlighting both compare through this, so a name the engine
/// calls a match always has a highlighted span.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

fn tier_of(name: &str, needle: &str) -> MatchTier {
    if name == needle {
        MatchTier::Exact
    } else if name.starts_with(needle) {
        MatchTier::Prefix
    } else if name.contains(needle) {
        MatchTier::Contains
    } else {
        MatchTier::None
    }
}

/// Filter and rank records for display
///
/// Returns references into `records` in display order. Inputs are never
/// modified; calling again with the same arguments gives the same result.
#[must_use]
pub fn evaluate<'a>(
    records: &'a [Record],
    query: &str,
    tab: Tab,
    filters: &FilterSet,
    policy: RankPolicy,
) -> Vec<&'a Record> {
    let candidates = records.iter().filter(|r| tab.admits(filters, r));

    let needle = fold_case(query.trim());
    if needle.is_empty() {
        return candidates.collect();
    }

    let mut ranked: Vec<(MatchTier, String, &Record)> = candidates
        .map(|record| {
            let name = fold_case(&record.display_name);
            let tier = match tier_of(&name, &needle) {
                MatchTier::Contains if !policy.include_contains => MatchTier::None,
                tier => tier,
            };
            (tier, name, record)
        })
        .filter(|(tier, _, _)| !(policy.drop_unmatched && *tier == MatchTier::None))
        .collect();

    // sort_by is stable, so full ties stay in catalog order
    ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    ranked.into_iter().map(|(_, _, record)| record).collect()
}

/// Number of records behind each visible tab
///
/// `all` counts every record whose group is enabled; each enabled group
/// counts its own records. Disabled groups have no tab and are omitted.
#[must_use]
pub fn tab_counts(records: &[Record], filters: &FilterSet) -> Vec<(Tab, usize)> {
    let all = records.iter().filter(|r| filters.admits(r)).count();

    std::iter::once((Tab::All, all))
        .chain(filters.enabled_groups().map(|group| {
            let count = records
                .iter()
                .filter(|r| group.contains(r.category))
                .count();
            (Tab::Group(group), count)
        }))
        .collect()
}
