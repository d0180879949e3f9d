//! Wire models for the MediaVault store API

use serde::{Deserialize, Serialize};

/// Generic acknowledgement returned by mutation endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    /// Populated by the upload endpoint with the stored filename
    pub filename: Option<String>,
    pub error: Option<String>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One row of the bookmarks listing; the only listing that carries kind
#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkRow {
    pub media_type: String,
    pub filename: String,
}

/// Request body for creating a bookmark
#[derive(Debug, Clone, Serialize)]
pub struct BookmarkRequest<'a> {
    #[serde(rename = "mediaType")]
    pub media_type: &'a str,
    pub filename: &'a str,
}

/// Request body for creating a list
#[derive(Debug, Clone, Serialize)]
pub struct CreateListRequest<'a> {
    pub list: &'a str,
}

/// Request body for credential verification
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from credential verification
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub username: Option<String>,
}
