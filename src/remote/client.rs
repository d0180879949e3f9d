//! HTTP client for the MediaVault store API

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use super::error::{GatewayError, GatewayResult, Rejection};
use super::models::*;
use super::RemoteCatalog;
use crate::catalog::{MediaItem, MediaKind};

/// HTTP gateway to the MediaVault store
#[derive(Clone)]
pub struct VaultClient {
    base_url: String,
    http_client: Client,
}

impl VaultClient {
    /// Create a new client for the given server
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let http_client = Client::builder()
            .user_agent("mediavault/0.1.0")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Stream locator for an item's bytes, handed to playback
    pub fn media_url(&self, kind: MediaKind, name: &str) -> String {
        self.api_url(&format!(
            "{}/{}",
            kind.api_segment(),
            urlencoding::encode(name)
        ))
    }

    /// Locator for an item's thumbnail, if the store extracted one
    pub fn thumbnail_url(&self, kind: MediaKind, name: &str) -> String {
        self.api_url(&format!(
            "{}/thumbnail/{}",
            kind.api_segment(),
            urlencoding::encode(name)
        ))
    }

    /// Verify credentials against the store
    ///
    /// Returns the confirmed display identity on success.
    pub async fn login(&self, username: &str, password: &str) -> GatewayResult<String> {
        let url = self.api_url("login");
        debug!("Verifying credentials at {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(GatewayError::Unreachable)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(GatewayError::Rejected(Rejection::Other(
                "invalid username or password".to_string(),
            )));
        }

        let login: LoginResponse = Self::decode(response).await?;
        if !login.success {
            return Err(GatewayError::Rejected(Rejection::Other(
                "store did not confirm the login".to_string(),
            )));
        }
        Ok(login.username.unwrap_or_else(|| username.to_string()))
    }

    /// Decode a response body, turning non-2xx statuses into rejections
    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> GatewayResult<T> {
        if !response.status().is_success() {
            return Err(Self::rejection_from(response).await);
        }
        response.json().await.map_err(GatewayError::Unreachable)
    }

    /// Consume a mutation response, checking the acknowledgement
    async fn ack(response: Response) -> GatewayResult<Ack> {
        let ack: Ack = Self::decode(response).await?;
        Self::confirm(ack)
    }

    /// The store pairs every 2xx mutation body with `success: true`;
    /// anything else is a rejection even under a 2xx status.
    fn confirm(ack: Ack) -> GatewayResult<Ack> {
        if let Some(message) = &ack.error {
            return Err(GatewayError::Rejected(Rejection::from_server_message(
                message,
            )));
        }
        if !ack.success {
            return Err(GatewayError::Rejected(Rejection::Other(
                "store did not acknowledge the mutation".to_string(),
            )));
        }
        Ok(ack)
    }

    async fn rejection_from(response: Response) -> GatewayError {
        let status = response.status();
        match response.bytes().await {
            Ok(body) => Self::rejection_from_body(status, &body),
            Err(err) => GatewayError::Unreachable(err),
        }
    }

    /// Map an error-status body onto a rejection reason
    ///
    /// A body that is not the `{"error": ...}` shape still rejects, but
    /// only the status survives as the reason.
    fn rejection_from_body(status: StatusCode, body: &[u8]) -> GatewayError {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(body) => GatewayError::Rejected(Rejection::from_server_message(&body.error)),
            Err(_) => GatewayError::Rejected(Rejection::Other(format!(
                "store returned status {status}"
            ))),
        }
    }

    async fn get(&self, path: &str) -> GatewayResult<Response> {
        let url = self.api_url(path);
        debug!("GET {}", url);
        self.http_client
            .get(&url)
            .send()
            .await
            .map_err(GatewayError::Unreachable)
    }

    async fn delete(&self, path: &str) -> GatewayResult<Response> {
        let url = self.api_url(path);
        debug!("DELETE {}", url);
        self.http_client
            .delete(&url)
            .send()
            .await
            .map_err(GatewayError::Unreachable)
    }

    async fn post_empty(&self, path: &str) -> GatewayResult<Response> {
        let url = self.api_url(path);
        debug!("POST {}", url);
        self.http_client
            .post(&url)
            .send()
            .await
            .map_err(GatewayError::Unreachable)
    }
}

#[async_trait]
impl RemoteCatalog for VaultClient {
    async fn items_by_kind(&self, kind: MediaKind) -> GatewayResult<Vec<MediaItem>> {
        let response = self.get(kind.api_segment()).await?;
        let names: Vec<String> = Self::decode(response).await?;

        debug!("Found {} {} item(s)", names.len(), kind);
        Ok(names
            .into_iter()
            .map(|name| MediaItem::new(name, kind))
            .collect())
    }

    async fn bookmarks(&self) -> GatewayResult<Vec<MediaItem>> {
        let response = self.get("bookmarks").await?;
        let rows: Vec<BookmarkRow> = Self::decode(response).await?;

        debug!("Found {} bookmark(s)", rows.len());
        Ok(rows
            .into_iter()
            .map(|row| {
                // Fall back to classification if the store's kind tag is
                // missing or unrecognized.
                let kind = MediaKind::parse(&row.media_type)
                    .unwrap_or_else(|| crate::catalog::classify(&row.filename));
                MediaItem::new(row.filename, kind)
            })
            .collect())
    }

    async fn collection_items(&self, name: &str) -> GatewayResult<Vec<MediaItem>> {
        let response = self
            .get(&format!("list/{}", urlencoding::encode(name)))
            .await?;
        let names: Vec<String> = Self::decode(response).await?;

        debug!("Found {} item(s) in list '{}'", names.len(), name);
        // Named lists store names only; kind is recovered by extension.
        Ok(names.into_iter().map(MediaItem::classified).collect())
    }

    async fn collection_names(&self) -> GatewayResult<Vec<String>> {
        let response = self.get("lists").await?;
        Self::decode(response).await
    }

    async fn upload(&self, kind: MediaKind, filename: &str, data: Bytes) -> GatewayResult<String> {
        let url = self.api_url(&format!("{}/upload", kind.api_segment()));
        debug!("Uploading '{}' ({} bytes) to {}", filename, data.len(), url);

        let part = reqwest::multipart::Part::stream(data).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(GatewayError::Unreachable)?;

        let ack = Self::ack(response).await?;
        Ok(ack.filename.unwrap_or_else(|| filename.to_string()))
    }

    async fn delete_item(&self, kind: MediaKind, name: &str) -> GatewayResult<()> {
        let response = self
            .delete(&format!(
                "{}/{}",
                kind.api_segment(),
                urlencoding::encode(name)
            ))
            .await?;
        Self::ack(response).await?;
        Ok(())
    }

    async fn add_bookmark(&self, kind: MediaKind, name: &str) -> GatewayResult<()> {
        let url = self.api_url("bookmarks");
        debug!("POST {} ({} '{}')", url, kind, name);

        let response = self
            .http_client
            .post(&url)
            .json(&BookmarkRequest {
                media_type: kind.api_segment(),
                filename: name,
            })
            .send()
            .await
            .map_err(GatewayError::Unreachable)?;

        Self::ack(response).await?;
        Ok(())
    }

    async fn remove_bookmark(&self, kind: MediaKind, name: &str) -> GatewayResult<()> {
        let response = self
            .delete(&format!(
                "bookmarks/{}/{}",
                kind.api_segment(),
                urlencoding::encode(name)
            ))
            .await?;
        Self::ack(response).await?;
        Ok(())
    }

    async fn add_to_collection(&self, list: &str, name: &str) -> GatewayResult<()> {
        let response = self
            .post_empty(&format!(
                "list/{}/{}",
                urlencoding::encode(list),
                urlencoding::encode(name)
            ))
            .await?;
        Self::ack(response).await?;
        Ok(())
    }

    async fn remove_from_collection(&self, list: &str, name: &str) -> GatewayResult<()> {
        let response = self
            .delete(&format!(
                "list/{}/{}",
                urlencoding::encode(list),
                urlencoding::encode(name)
            ))
            .await?;
        Self::ack(response).await?;
        Ok(())
    }

    async fn create_collection(&self, name: &str) -> GatewayResult<()> {
        if name.trim().is_empty() {
            return Err(GatewayError::Invalid("list name cannot be empty".into()));
        }

        let url = self.api_url("lists");
        debug!("POST {} (create list '{}')", url, name);

        let response = self
            .http_client
            .post(&url)
            .json(&CreateListRequest { list: name })
            .send()
            .await
            .map_err(GatewayError::Unreachable)?;

        Self::ack(response).await?;
        Ok(())
    }

    async fn delete_collection(&self, name: &str) -> GatewayResult<()> {
        let response = self
            .delete(&format!("lists/{}", urlencoding::encode(name)))
            .await?;
        Self::ack(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_maps_to_rejection_reason() {
        let err = VaultClient::rejection_from_body(
            StatusCode::BAD_REQUEST,
            br#"{"error": "List exists"}"#,
        );
        assert!(matches!(
            err,
            GatewayError::Rejected(Rejection::DuplicateName)
        ));
    }

    #[test]
    fn test_malformed_error_body_keeps_status() {
        let err =
            VaultClient::rejection_from_body(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops");
        match err {
            GatewayError::Rejected(Rejection::Other(reason)) => {
                assert!(reason.contains("500"));
            }
            other => panic!("expected Other rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_confirm_accepts_acknowledged_mutation() {
        let ack = Ack {
            success: true,
            filename: Some("song.mp3".to_string()),
            error: None,
        };
        let ack = VaultClient::confirm(ack).unwrap();
        assert_eq!(ack.filename.as_deref(), Some("song.mp3"));
    }

    #[test]
    fn test_confirm_rejects_error_message() {
        let ack = Ack {
            success: false,
            filename: None,
            error: Some("Already bookmarked".to_string()),
        };
        let err = VaultClient::confirm(ack).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Rejected(Rejection::AlreadyBookmarked)
        ));
    }

    #[test]
    fn test_confirm_rejects_unacknowledged_body() {
        let ack = Ack {
            success: false,
            filename: None,
            error: None,
        };
        let err = VaultClient::confirm(ack).unwrap_err();
        assert!(matches!(err, GatewayError::Rejected(Rejection::Other(_))));
    }
}
