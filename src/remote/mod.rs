//! Remote store gateway
//!
//! The single chokepoint through which every catalog query and mutation
//! crosses to the authoritative store. [`RemoteCatalog`] names one
//! operation per catalog action; [`VaultClient`] is the HTTP
//! implementation.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod models;

use async_trait::async_trait;
use bytes::Bytes;

use crate::catalog::{MediaItem, MediaKind};

pub use client::VaultClient;
pub use error::{GatewayError, GatewayResult, Rejection};

/// Catalog operations offered by the authoritative store
#[async_trait]
pub trait RemoteCatalog {
    /// All items of one kind
    async fn items_by_kind(&self, kind: MediaKind) -> GatewayResult<Vec<MediaItem>>;

    /// All bookmarked items; rows carry explicit kind
    async fn bookmarks(&self) -> GatewayResult<Vec<MediaItem>>;

    /// Items of one user-defined list; kind is re-derived client-side
    async fn collection_items(&self, name: &str) -> GatewayResult<Vec<MediaItem>>;

    /// Names of every user-defined list
    async fn collection_names(&self) -> GatewayResult<Vec<String>>;

    /// Store a new file; returns the filename the store settled on
    async fn upload(&self, kind: MediaKind, filename: &str, data: Bytes) -> GatewayResult<String>;

    /// Permanently remove the underlying file
    async fn delete_item(&self, kind: MediaKind, name: &str) -> GatewayResult<()>;

    async fn add_bookmark(&self, kind: MediaKind, name: &str) -> GatewayResult<()>;
    async fn remove_bookmark(&self, kind: MediaKind, name: &str) -> GatewayResult<()>;

    async fn add_to_collection(&self, list: &str, name: &str) -> GatewayResult<()>;
    async fn remove_from_collection(&self, list: &str, name: &str) -> GatewayResult<()>;

    async fn create_collection(&self, name: &str) -> GatewayResult<()>;
    async fn delete_collection(&self, name: &str) -> GatewayResult<()>;
}
