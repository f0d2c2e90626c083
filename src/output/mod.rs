//! Output formatting for CLI display
//!
//! Formats ranked records, tab counts and JSON views for the `query`,
//! `tabs` and `link` commands.

use crate::catalog::{Presence, Record};
use crate::filters::Tab;
use crate::search::{MatchTier, Segment, highlight, match_tier};
use colored::Colorize;
use serde::Serialize;

/// Render highlight segments with matched text in bold yellow
#[must_use]
pub fn highlighted(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.matched {
                s.text.yellow().bold().to_string()
            } else {
                s.text.to_string()
            }
        })
        .collect()
}

fn colored_subtitle(record: &Record) -> Option<String> {
    let subtitle = record.subtitle()?;
    let styled = match record.presence() {
        Presence::Online => subtitle.green(),
        Presence::Recent | Presence::Offline => subtitle.dimmed(),
    };
    Some(styled.to_string())
}

/// Format a record for a result listing
///
/// Quiet mode prints the bare name so the output can be piped.
#[must_use]
pub fn record_line(record: &Record, query: &str, quiet: bool) -> String {
    if quiet {
        return record.display_name.clone();
    }

    let name = highlighted(&highlight(&record.display_name, query));
    let category = format!("{:<6}", record.category.as_str()).cyan();
    match colored_subtitle(record) {
        Some(subtitle) => format!("  {category} {name}  {subtitle}"),
        None => format!("  {category} {name}"),
    }
}

/// Format a tab with its record count
#[must_use]
pub fn tab_with_count(tab: Tab, count: usize, active: bool, quiet: bool) -> String {
    if quiet {
        return format!("{tab}\t{count}");
    }
    let label = format!("{} ({count})", tab.label());
    if active {
        format!("▸ {}", label.bold())
    } else {
        format!("  {label}")
    }
}

/// JSON view of a ranked record
#[derive(Debug, Serialize)]
pub struct RankedRecord<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub tier: MatchTier,
}

/// Serialize ranked records as pretty JSON
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn results_json(records: &[&Record], query: &str) -> Result<String, serde_json::Error> {
    let ranked: Vec<RankedRecord<'_>> = records
        .iter()
        .map(|record| RankedRecord {
            record,
            tier: match_tier(&record.display_name, query),
        })
        .collect();
    serde_json::to_string_pretty(&ranked)
}
