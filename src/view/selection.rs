//! The currently active browsing/viewing context
//!
//! Exactly one context is active at a time; the enum makes the
//! at-most-one-browse-surface invariant structural rather than checked.

use crate::catalog::{MediaItem, MediaKind};

/// What the session is currently looking at
#[derive(Debug, Clone, PartialEq)]
pub enum ViewSelection {
    Home,
    BrowseKind(MediaKind),
    BrowseList(String),
    Bookmarks,
    /// Single-item viewer; the item's kind is already resolved
    Viewing(MediaItem),
}

/// The one concrete data request a selection resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    ByKind(MediaKind),
    ByList(String),
    Bookmarks,
}

impl ViewSelection {
    /// Resolve this selection into its data request, if it has one
    ///
    /// Home shows no item set; Viewing reuses the set already loaded by
    /// the browse state it was entered from.
    pub fn fetch_request(&self) -> Option<FetchRequest> {
        match self {
            ViewSelection::Home | ViewSelection::Viewing(_) => None,
            ViewSelection::BrowseKind(kind) => Some(FetchRequest::ByKind(*kind)),
            ViewSelection::BrowseList(name) => Some(FetchRequest::ByList(name.clone())),
            ViewSelection::Bookmarks => Some(FetchRequest::Bookmarks),
        }
    }

    /// Whether items can be opened/acted on from this selection
    pub fn is_browsing(&self) -> bool {
        matches!(
            self,
            ViewSelection::BrowseKind(_) | ViewSelection::BrowseList(_) | ViewSelection::Bookmarks
        )
    }

    /// Header title for this selection
    pub fn title(&self) -> String {
        match self {
            ViewSelection::Home => "Home".to_string(),
            ViewSelection::BrowseKind(kind) => kind.label().to_string(),
            ViewSelection::BrowseList(name) => name.clone(),
            ViewSelection::Bookmarks => "Bookmarks".to_string(),
            ViewSelection::Viewing(item) => item.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_request_mapping() {
        assert_eq!(ViewSelection::Home.fetch_request(), None);
        assert_eq!(
            ViewSelection::BrowseKind(MediaKind::Photo).fetch_request(),
            Some(FetchRequest::ByKind(MediaKind::Photo))
        );
        assert_eq!(
            ViewSelection::BrowseList("Road Trip".to_string()).fetch_request(),
            Some(FetchRequest::ByList("Road Trip".to_string()))
        );
        assert_eq!(
            ViewSelection::Bookmarks.fetch_request(),
            Some(FetchRequest::Bookmarks)
        );
        assert_eq!(
            ViewSelection::Viewing(MediaItem::new("a.mp3", MediaKind::Music)).fetch_request(),
            None
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(ViewSelection::Home.title(), "Home");
        assert_eq!(ViewSelection::BrowseKind(MediaKind::Video).title(), "Videos");
        assert_eq!(ViewSelection::Bookmarks.title(), "Bookmarks");
    }
}
