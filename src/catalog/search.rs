//! In-memory search over the active view's item set
//!
//! Filtering never touches the remote store; it narrows whatever is
//! already loaded, and the query is not persisted across view switches.

use super::MediaItem;

/// Case-insensitive substring match against an item name
pub fn matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Filter items by query, preserving order
///
/// An empty query returns every item.
pub fn filter<'a>(items: &'a [MediaItem], query: &str) -> Vec<&'a MediaItem> {
    items
        .iter()
        .filter(|item| matches(&item.name, query))
        .collect()
}

/// Like [`filter`], but yields original indices (display row -> item slot)
pub fn filter_indices(items: &[MediaItem], query: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(&item.name, query))
        .map(|(i, _)| i)
        .collect()
}
