//! Routes navigation and catalog actions to the gateway and store
//!
//! Every surface (CLI commands, interactive browser) drives one of
//! these. The coordinator owns the gateway client, the collection
//! store, and the active selection; actions hit the gateway first and
//! patch local state only once the store has acknowledged the effect.

use tracing::debug;

use super::selection::{FetchRequest, ViewSelection};
use crate::catalog::{classify, MediaItem, MediaKind};
use crate::remote::{GatewayError, GatewayResult, RemoteCatalog};
use crate::store::CollectionStore;

pub struct ViewCoordinator<C> {
    client: C,
    store: CollectionStore,
    view: ViewSelection,
    /// State to return to from the single-item viewer; not a stack
    prior: ViewSelection,
}

impl<C: RemoteCatalog> ViewCoordinator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            store: CollectionStore::new(),
            view: ViewSelection::Home,
            prior: ViewSelection::Home,
        }
    }

    /// Fetch the list registry; done once at session start
    pub async fn init(&mut self) -> GatewayResult<()> {
        let names = self.client.collection_names().await?;
        debug!("Loaded {} list name(s)", names.len());
        self.store.set_lists(names);
        Ok(())
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn view(&self) -> &ViewSelection {
        &self.view
    }

    pub fn items(&self) -> &[MediaItem] {
        self.store.items()
    }

    pub fn lists(&self) -> &[String] {
        self.store.lists()
    }

    pub fn viewing(&self) -> Option<&MediaItem> {
        match &self.view {
            ViewSelection::Viewing(item) => Some(item),
            _ => None,
        }
    }

    async fn fetch(&self, request: &FetchRequest) -> GatewayResult<Vec<MediaItem>> {
        match request {
            FetchRequest::ByKind(kind) => self.client.items_by_kind(*kind).await,
            FetchRequest::ByList(name) => self.client.collection_items(name).await,
            FetchRequest::Bookmarks => self.client.bookmarks().await,
        }
    }

    /// Switch to a selection, loading its item set fresh
    ///
    /// The fetch happens before the switch: if it fails, the previous
    /// selection and its items stay intact.
    async fn activate(&mut self, view: ViewSelection) -> GatewayResult<()> {
        match view.fetch_request() {
            Some(request) => {
                let items = self.fetch(&request).await?;
                self.view = view;
                self.store.set_items(items);
            }
            None => {
                self.view = view;
                self.store.clear_items();
            }
        }
        Ok(())
    }

    pub async fn go_home(&mut self) -> GatewayResult<()> {
        self.activate(ViewSelection::Home).await
    }

    pub async fn go_bookmarks(&mut self) -> GatewayResult<()> {
        self.activate(ViewSelection::Bookmarks).await
    }

    pub async fn browse_kind(&mut self, kind: MediaKind) -> GatewayResult<()> {
        self.activate(ViewSelection::BrowseKind(kind)).await
    }

    pub async fn browse_list(&mut self, name: &str) -> GatewayResult<()> {
        // The system collection has its own surface and endpoint.
        if name == "Bookmarks" {
            return self.go_bookmarks().await;
        }
        self.activate(ViewSelection::BrowseList(name.to_string()))
            .await
    }

    /// Re-fetch the active selection's item set
    pub async fn refresh(&mut self) -> GatewayResult<()> {
        if let Some(request) = self.view.fetch_request() {
            let items = self.fetch(&request).await?;
            self.store.set_items(items);
        }
        Ok(())
    }

    /// Open an item from the active browse surface in the viewer
    ///
    /// Items already carry their resolved kind: the browsed kind in a
    /// kind view, the store's explicit kind in Bookmarks, a classified
    /// kind in a named list.
    pub fn open_item(&mut self, index: usize) -> Option<&MediaItem> {
        if !self.view.is_browsing() {
            return None;
        }
        let item = self.store.items().get(index)?.clone();
        self.prior = std::mem::replace(&mut self.view, ViewSelection::Viewing(item));
        self.viewing()
    }

    /// Return from the viewer to the immediately preceding state
    pub fn back(&mut self) {
        if matches!(self.view, ViewSelection::Viewing(_)) {
            self.view = std::mem::replace(&mut self.prior, ViewSelection::Home);
        }
    }

    /// Upload a file, then re-fetch the affected kind's listing
    ///
    /// The store assigns the stored filename, so the fresh listing is
    /// the only way to learn the new item's identity.
    pub async fn upload(
        &mut self,
        kind: MediaKind,
        filename: &str,
        data: bytes::Bytes,
    ) -> GatewayResult<String> {
        let stored = self.client.upload(kind, filename, data).await?;
        if self.view == ViewSelection::BrowseKind(kind) {
            self.refresh().await?;
        }
        Ok(stored)
    }

    /// Permanently delete an item; the caller confirms beforehand
    pub async fn delete_item(&mut self, name: &str) -> GatewayResult<()> {
        let ViewSelection::BrowseKind(kind) = &self.view else {
            return Err(GatewayError::Invalid(
                "delete is only available while browsing a media kind".into(),
            ));
        };
        let kind = *kind;

        self.client.delete_item(kind, name).await?;
        self.store.remove_item(name);
        Ok(())
    }

    /// Bookmark an item from the active view
    ///
    /// Duplicate bookmarks surface as `Rejected(AlreadyBookmarked)`; the
    /// Bookmarks set is not the active view here, so no patch applies.
    pub async fn bookmark_item(&mut self, name: &str) -> GatewayResult<()> {
        let kind = self.resolve_kind(name);
        self.client.add_bookmark(kind, name).await
    }

    pub async fn remove_bookmark(&mut self, kind: MediaKind, name: &str) -> GatewayResult<()> {
        self.client.remove_bookmark(kind, name).await?;
        if self.view == ViewSelection::Bookmarks {
            self.store.remove_bookmark(kind, name);
        }
        Ok(())
    }

    /// Add an item to a user-defined list; idempotent at the store
    pub async fn add_to_list(&mut self, list: &str, name: &str) -> GatewayResult<()> {
        if list.trim().is_empty() {
            return Err(GatewayError::Invalid("list name cannot be empty".into()));
        }

        self.client.add_to_collection(list, name).await?;
        if self.view == ViewSelection::BrowseList(list.to_string()) && !self.store.contains(name) {
            let mut items = self.store.items().to_vec();
            items.push(MediaItem::classified(name));
            self.store.set_items(items);
        }
        Ok(())
    }

    /// Remove an item from the list currently being browsed
    pub async fn remove_from_list(&mut self, name: &str) -> GatewayResult<()> {
        let ViewSelection::BrowseList(list) = &self.view else {
            return Err(GatewayError::Invalid(
                "not currently browsing a list".into(),
            ));
        };
        let list = list.clone();

        self.client.remove_from_collection(&list, name).await?;
        self.store.remove_item(name);
        Ok(())
    }

    /// Create a list; the selection stays where it is
    pub async fn create_list(&mut self, name: &str) -> GatewayResult<()> {
        if name.trim().is_empty() {
            return Err(GatewayError::Invalid("list name cannot be empty".into()));
        }

        self.client.create_collection(name).await?;
        self.store.add_list(name);
        Ok(())
    }

    /// Delete a list; collapses to Home if it was being browsed
    pub async fn delete_list(&mut self, name: &str) -> GatewayResult<()> {
        self.client.delete_collection(name).await?;
        self.store.remove_list(name);

        let stale = ViewSelection::BrowseList(name.to_string());
        if self.view == stale {
            self.view = ViewSelection::Home;
            self.store.clear_items();
        }
        if self.prior == stale {
            self.prior = ViewSelection::Home;
        }
        Ok(())
    }

    /// Kind for an item named from the active view
    fn resolve_kind(&self, name: &str) -> MediaKind {
        if let ViewSelection::BrowseKind(kind) = &self.view {
            return *kind;
        }
        self.store
            .items()
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.kind)
            .unwrap_or_else(|| classify(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::fake::FakeCatalog;
    use crate::remote::Rejection;

    #[tokio::test]
    async fn test_bookmark_round_trip() {
        let fake = FakeCatalog::with_files(MediaKind::Music, &["a.mp3", "b.mp3", "c.mp3"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.init().await.unwrap();

        coordinator.browse_kind(MediaKind::Music).await.unwrap();
        assert_eq!(coordinator.items().len(), 3);

        coordinator.bookmark_item("a.mp3").await.unwrap();

        coordinator.go_bookmarks().await.unwrap();
        assert_eq!(
            coordinator.items(),
            &[MediaItem::new("a.mp3", MediaKind::Music)]
        );

        coordinator
            .remove_bookmark(MediaKind::Music, "a.mp3")
            .await
            .unwrap();
        assert!(coordinator.items().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_bookmark_rejected_without_state_change() {
        let fake = FakeCatalog::with_files(MediaKind::Music, &["a.mp3"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.browse_kind(MediaKind::Music).await.unwrap();

        coordinator.bookmark_item("a.mp3").await.unwrap();
        let err = coordinator.bookmark_item("a.mp3").await.unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::AlreadyBookmarked));

        coordinator.go_bookmarks().await.unwrap();
        assert_eq!(coordinator.items().len(), 1);
    }

    #[tokio::test]
    async fn test_create_then_delete_active_list_collapses_to_home() {
        let mut coordinator = ViewCoordinator::new(FakeCatalog::default());
        coordinator.init().await.unwrap();

        coordinator.create_list("Road Trip").await.unwrap();
        assert!(coordinator.store().has_list("Road Trip"));

        coordinator.browse_list("Road Trip").await.unwrap();
        coordinator.delete_list("Road Trip").await.unwrap();

        assert_eq!(coordinator.view(), &ViewSelection::Home);
        assert!(!coordinator.store().has_list("Road Trip"));
        assert!(coordinator.items().is_empty());
    }

    #[tokio::test]
    async fn test_delete_inactive_list_keeps_selection() {
        let fake = FakeCatalog::with_files(MediaKind::Photo, &["a.png"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.create_list("Old").await.unwrap();
        coordinator.browse_kind(MediaKind::Photo).await.unwrap();

        coordinator.delete_list("Old").await.unwrap();
        assert_eq!(
            coordinator.view(),
            &ViewSelection::BrowseKind(MediaKind::Photo)
        );
        assert_eq!(coordinator.items().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_list_name_rejected() {
        let mut coordinator = ViewCoordinator::new(FakeCatalog::default());
        coordinator.create_list("Trips").await.unwrap();

        let err = coordinator.create_list("Trips").await.unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::DuplicateName));
        assert_eq!(coordinator.lists().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_list_name_is_invalid() {
        let mut coordinator = ViewCoordinator::new(FakeCatalog::default());
        let err = coordinator.create_list("  ").await.unwrap_err();
        assert!(matches!(err, GatewayError::Invalid(_)));
        assert!(coordinator.lists().is_empty());
    }

    #[tokio::test]
    async fn test_upload_refreshes_active_kind_view() {
        let fake = FakeCatalog::with_files(MediaKind::Photo, &["old.png"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.browse_kind(MediaKind::Photo).await.unwrap();

        coordinator
            .upload(MediaKind::Photo, "new.png", bytes::Bytes::from_static(b"x"))
            .await
            .unwrap();

        assert!(coordinator.store().contains("new.png"));
        assert_eq!(coordinator.items().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_item_patches_active_view() {
        let fake = FakeCatalog::with_files(MediaKind::Music, &["a.mp3", "b.mp3"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.browse_kind(MediaKind::Music).await.unwrap();

        coordinator.delete_item("a.mp3").await.unwrap();
        assert!(!coordinator.store().contains("a.mp3"));

        // A fresh fetch agrees with the patched state.
        coordinator.refresh().await.unwrap();
        assert!(!coordinator.store().contains("a.mp3"));
        assert_eq!(coordinator.items().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_item_outside_kind_view_is_invalid() {
        let mut coordinator = ViewCoordinator::new(FakeCatalog::default());
        let err = coordinator.delete_item("a.mp3").await.unwrap_err();
        assert!(matches!(err, GatewayError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_add_to_list_idempotent_membership() {
        let fake = FakeCatalog::with_files(MediaKind::Music, &["a.mp3"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.create_list("Mix").await.unwrap();
        coordinator.browse_kind(MediaKind::Music).await.unwrap();

        coordinator.add_to_list("Mix", "a.mp3").await.unwrap();
        coordinator.add_to_list("Mix", "a.mp3").await.unwrap();

        coordinator.browse_list("Mix").await.unwrap();
        assert_eq!(coordinator.items().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_from_list_patches_and_persists() {
        let fake = FakeCatalog::with_files(MediaKind::Music, &["a.mp3", "b.mp3"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.create_list("Mix").await.unwrap();
        coordinator.browse_kind(MediaKind::Music).await.unwrap();
        coordinator.add_to_list("Mix", "a.mp3").await.unwrap();
        coordinator.add_to_list("Mix", "b.mp3").await.unwrap();

        coordinator.browse_list("Mix").await.unwrap();
        coordinator.remove_from_list("a.mp3").await.unwrap();
        assert_eq!(coordinator.items().len(), 1);

        coordinator.refresh().await.unwrap();
        assert_eq!(coordinator.items().len(), 1);
        assert_eq!(coordinator.items()[0].name, "b.mp3");
    }

    #[tokio::test]
    async fn test_open_item_and_back() {
        let fake = FakeCatalog::with_files(MediaKind::Video, &["clip.mp4"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.browse_kind(MediaKind::Video).await.unwrap();

        let item = coordinator.open_item(0).unwrap().clone();
        assert_eq!(item.kind, MediaKind::Video);
        assert!(matches!(coordinator.view(), ViewSelection::Viewing(_)));

        coordinator.back();
        assert_eq!(
            coordinator.view(),
            &ViewSelection::BrowseKind(MediaKind::Video)
        );
        // The browse set survives the viewer round trip.
        assert_eq!(coordinator.items().len(), 1);
    }

    #[tokio::test]
    async fn test_viewer_kind_resolved_by_classifier_in_lists() {
        let mut coordinator = ViewCoordinator::new(FakeCatalog::default());
        coordinator.create_list("Mixed").await.unwrap();
        coordinator.browse_list("Mixed").await.unwrap();
        coordinator.add_to_list("Mixed", "pic.png").await.unwrap();

        let item = coordinator.open_item(0).unwrap();
        assert_eq!(item.kind, MediaKind::Photo);
    }

    #[tokio::test]
    async fn test_browse_list_named_bookmarks_routes_to_bookmarks() {
        let fake = FakeCatalog::with_files(MediaKind::Music, &["a.mp3"]);
        let mut coordinator = ViewCoordinator::new(fake);
        coordinator.browse_kind(MediaKind::Music).await.unwrap();
        coordinator.bookmark_item("a.mp3").await.unwrap();

        coordinator.browse_list("Bookmarks").await.unwrap();
        assert_eq!(coordinator.view(), &ViewSelection::Bookmarks);
        assert_eq!(coordinator.items().len(), 1);
    }

    #[tokio::test]
    async fn test_open_item_from_home_is_ignored() {
        let mut coordinator = ViewCoordinator::new(FakeCatalog::default());
        assert!(coordinator.open_item(0).is_none());
        assert_eq!(coordinator.view(), &ViewSelection::Home);
    }

    #[tokio::test]
    async fn test_back_after_deleting_prior_list_goes_home() {
        let mut coordinator = ViewCoordinator::new(FakeCatalog::default());
        coordinator.create_list("Gone").await.unwrap();
        coordinator.browse_list("Gone").await.unwrap();
        coordinator.add_to_list("Gone", "a.mp3").await.unwrap();
        coordinator.open_item(0).unwrap();

        coordinator.delete_list("Gone").await.unwrap();
        coordinator.back();
        assert_eq!(coordinator.view(), &ViewSelection::Home);
    }
}
