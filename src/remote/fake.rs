//! In-memory [`RemoteCatalog`] mirroring the store's semantics
//!
//! Backs the coordinator and browser tests: idempotent list membership,
//! duplicate bookmark and list-name rejection, bookmark rows with
//! explicit kind.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use super::{GatewayError, GatewayResult, Rejection, RemoteCatalog};
use crate::catalog::{MediaItem, MediaKind};

#[derive(Default)]
pub struct FakeCatalog {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    files: HashMap<MediaKind, Vec<String>>,
    lists: BTreeMap<String, Vec<String>>,
    bookmarks: Vec<(MediaKind, String)>,
}

impl FakeCatalog {
    pub fn with_files(kind: MediaKind, names: &[&str]) -> Self {
        let fake = Self::default();
        fake.state
            .lock()
            .unwrap()
            .files
            .insert(kind, names.iter().map(|n| n.to_string()).collect());
        fake
    }
}

#[async_trait]
impl RemoteCatalog for FakeCatalog {
    async fn items_by_kind(&self, kind: MediaKind) -> GatewayResult<Vec<MediaItem>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .files
            .get(&kind)
            .map(|names| {
                names
                    .iter()
                    .map(|n| MediaItem::new(n.clone(), kind))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn bookmarks(&self) -> GatewayResult<Vec<MediaItem>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .bookmarks
            .iter()
            .map(|(kind, name)| MediaItem::new(name.clone(), *kind))
            .collect())
    }

    async fn collection_items(&self, name: &str) -> GatewayResult<Vec<MediaItem>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .lists
            .get(name)
            .map(|names| names.iter().cloned().map(MediaItem::classified).collect())
            .unwrap_or_default())
    }

    async fn collection_names(&self) -> GatewayResult<Vec<String>> {
        let state = self.state.lock().unwrap();
        Ok(state.lists.keys().cloned().collect())
    }

    async fn upload(&self, kind: MediaKind, filename: &str, _data: Bytes) -> GatewayResult<String> {
        let mut state = self.state.lock().unwrap();
        state
            .files
            .entry(kind)
            .or_default()
            .push(filename.to_string());
        Ok(filename.to_string())
    }

    async fn delete_item(&self, kind: MediaKind, name: &str) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        state.files.entry(kind).or_default().retain(|n| n != name);
        Ok(())
    }

    async fn add_bookmark(&self, kind: MediaKind, name: &str) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.bookmarks.iter().any(|(k, n)| *k == kind && n == name) {
            return Err(GatewayError::Rejected(Rejection::AlreadyBookmarked));
        }
        state.bookmarks.push((kind, name.to_string()));
        Ok(())
    }

    async fn remove_bookmark(&self, kind: MediaKind, name: &str) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        state.bookmarks.retain(|(k, n)| !(*k == kind && n == name));
        Ok(())
    }

    async fn add_to_collection(&self, list: &str, name: &str) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        let entries = state.lists.entry(list.to_string()).or_default();
        // The store ignores duplicate adds rather than rejecting them.
        if !entries.iter().any(|n| n == name) {
            entries.push(name.to_string());
        }
        Ok(())
    }

    async fn remove_from_collection(&self, list: &str, name: &str) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(entries) = state.lists.get_mut(list) {
            entries.retain(|n| n != name);
        }
        Ok(())
    }

    async fn create_collection(&self, name: &str) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.lists.contains_key(name) {
            return Err(GatewayError::Rejected(Rejection::DuplicateName));
        }
        state.lists.insert(name.to_string(), Vec::new());
        Ok(())
    }

    async fn delete_collection(&self, name: &str) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        state.lists.remove(name);
        Ok(())
    }
}
