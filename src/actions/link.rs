//! Target links for records

use crate::catalog::{Category, Record};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://example.com";

/// Resolve the link a record points at
///
/// - people with an avatar link to the avatar
/// - files link to `{base}/files/{name}`
/// - folders link to `{base}/folders/{name}`
/// - everything else links to `{base}/{category}/{id}`
///
/// # Examples
///
/// ```
/// use seekr::actions::resolve_target;
/// use seekr::catalog::{Category, Record};
///
/// let folder = Record::new("2", Category::Folder, "Photos");
/// assert_eq!(resolve_target(&folder, "https://example.com"), "https://example.com/folders/Photos");
/// ```
#[must_use]
pub fn resolve_target(record: &Record, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    match (record.category, record.avatar_url.as_deref()) {
        (Category::Person, Some(avatar)) => avatar.to_string(),
        (Category::File, _) => format!("{base}/files/{}", record.display_name),
        (Category::Folder, _) => format!("{base}/folders/{}", record.display_name),
        (category, _) => format!("{base}/{category}/{}", record.id),
    }
}
