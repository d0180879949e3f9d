//! Client-side catalog state
//!
//! Holds the registry of user-defined list names and the item set of the
//! currently active view. Confirmed mutations are applied as local patches
//! by identity; a patch runs only after the gateway reports Ok, so there
//! is no rollback path.

use crate::catalog::{MediaItem, MediaKind};

/// Session-lifetime cache of registry and active-view items
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    /// User-defined list names, sorted; the single shared registry
    lists: Vec<String>,
    /// Item set of the active view only; replaced on every view switch
    items: Vec<MediaItem>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lists(&self) -> &[String] {
        &self.lists
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn has_list(&self, name: &str) -> bool {
        self.lists.iter().any(|l| l == name)
    }

    /// Replace the registry with a fresh fetch (session start)
    pub fn set_lists(&mut self, mut lists: Vec<String>) {
        lists.sort();
        lists.dedup();
        self.lists = lists;
    }

    /// Record a confirmed list creation; idempotent
    pub fn add_list(&mut self, name: &str) {
        if !self.has_list(name) {
            self.lists.push(name.to_string());
            self.lists.sort();
        }
    }

    /// Record a confirmed list deletion
    pub fn remove_list(&mut self, name: &str) {
        self.lists.retain(|l| l != name);
    }

    /// Replace the active view's item set with a fresh fetch
    pub fn set_items(&mut self, items: Vec<MediaItem>) {
        self.items = items;
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// Patch out an item by name after a confirmed delete/remove
    ///
    /// Names are unique within a view, so this is patch-by-identity and
    /// commutes with patches for other names.
    pub fn remove_item(&mut self, name: &str) {
        self.items.retain(|item| item.name != name);
    }

    /// Patch out a bookmark row; bookmark identity is the (kind, name) pair
    pub fn remove_bookmark(&mut self, kind: MediaKind, name: &str) {
        self.items
            .retain(|item| !(item.kind == kind && item.name == name));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_sorted_and_deduped() {
        let mut store = CollectionStore::new();
        store.set_lists(vec![
            "Zebra".to_string(),
            "Alpha".to_string(),
            "Alpha".to_string(),
        ]);
        assert_eq!(store.lists(), &["Alpha".to_string(), "Zebra".to_string()]);
    }

    #[test]
    fn test_add_list_idempotent() {
        let mut store = CollectionStore::new();
        store.add_list("Road Trip");
        store.add_list("Road Trip");
        assert_eq!(store.lists().len(), 1);
    }

    #[test]
    fn test_add_list_keeps_order() {
        let mut store = CollectionStore::new();
        store.add_list("Workout");
        store.add_list("Chill");
        assert_eq!(
            store.lists(),
            &["Chill".to_string(), "Workout".to_string()]
        );
    }

    #[test]
    fn test_remove_item_by_name() {
        let mut store = CollectionStore::new();
        store.set_items(vec![
            MediaItem::new("a.mp3", MediaKind::Music),
            MediaItem::new("b.mp3", MediaKind::Music),
        ]);
        store.remove_item("a.mp3");
        assert!(!store.contains("a.mp3"));
        assert!(store.contains("b.mp3"));
    }

    #[test]
    fn test_remove_bookmark_matches_kind_and_name() {
        let mut store = CollectionStore::new();
        store.set_items(vec![
            MediaItem::new("shared.mp4", MediaKind::Video),
            MediaItem::new("shared.mp4", MediaKind::Photo),
        ]);
        store.remove_bookmark(MediaKind::Video, "shared.mp4");
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].kind, MediaKind::Photo);
    }

    #[test]
    fn test_view_switch_replaces_items() {
        let mut store = CollectionStore::new();
        store.set_items(vec![MediaItem::new("a.mp3", MediaKind::Music)]);
        store.set_items(vec![MediaItem::new("b.png", MediaKind::Photo)]);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].name, "b.png");
    }
}
