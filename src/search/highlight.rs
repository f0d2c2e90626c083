//! Query highlighting
//!
//! Splits a display string into matched and unmatched pieces so a front end
//! can style every case-insensitive occurrence of the query.

use super::engine::fold_case;
use regex::Regex;

/// A slice of the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    const fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    const fn hit(text: &'a str) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

/// Case-folded copy of a string with a map back to the original offsets
struct Folded {
    text: String,
    /// `(folded offset, original offset)` at every original char boundary,
    /// ending with both lengths
    bounds: Vec<(usize, usize)>,
}

impl Folded {
    fn new(original: &str) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut bounds = Vec::with_capacity(original.len() + 1);
        for (offset, c) in original.char_indices() {
            bounds.push((text.len(), offset));
            text.extend(c.to_lowercase());
        }
        bounds.push((text.len(), original.len()));
        Self { text, bounds }
    }

    /// Original start of the char whose folded form contains `folded`
    fn start_of(&self, folded: usize) -> usize {
        let idx = self.bounds.partition_point(|&(f, _)| f <= folded);
        self.bounds[idx.saturating_sub(1)].1
    }

    /// Original end of the char whose folded form contains `folded - 1`
    fn end_of(&self, folded: usize) -> usize {
        let idx = self.bounds.partition_point(|&(f, _)| f < folded);
        self.bounds[idx.min(self.bounds.len() - 1)].1
    }
}

/// Split `text` around case-insensitive occurrences of `query`
///
/// The query is trimmed and matched literally, using the same case folding
/// as [`match_tier`](super::match_tier). A match that covers only part of a
/// char's lowercase form highlights the whole char. Joining the segments
/// always gives back `text`. A blank query yields a single unmatched segment.
///
/// # Examples
///
/// ```
/// use seekr::search::highlight;
///
/// let parts = highlight("Randall", "AND");
/// let matched: Vec<&str> = parts.iter().filter(|s| s.matched).map(|s| s.text).collect();
/// assert_eq!(matched, vec!["and"]);
/// ```
#[must_use]
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let needle = fold_case(query.trim());
    if needle.is_empty() || text.is_empty() {
        return vec![Segment::plain(text)];
    }

    let Ok(pattern) = Regex::new(&regex::escape(&needle)) else {
        return vec![Segment::plain(text)];
    };

    let folded = Folded::new(text);
    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(&folded.text) {
        let start = folded.start_of(found.start()).max(last);
        let end = folded.end_of(found.end());
        if end <= start {
            continue;
        }
        if start > last {
            segments.push(Segment::plain(&text[last..start]));
        }
        segments.push(Segment::hit(&text[start..end]));
        last = end;
    }
    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}
