//! Media kinds, classification, and the catalog item model

pub mod search;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Media category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Music,
    Video,
    Photo,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Music, MediaKind::Video, MediaKind::Photo];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Music => "music",
            MediaKind::Video => "video",
            MediaKind::Photo => "photo",
        }
    }

    /// URL path segment used by the remote store
    ///
    /// The store exposes plural segments for videos and photos
    /// (`/api/videos`, `/api/photos`) but singular for music.
    pub fn api_segment(&self) -> &'static str {
        match self {
            MediaKind::Music => "music",
            MediaKind::Video => "videos",
            MediaKind::Photo => "photos",
        }
    }

    /// Display label for sidebar/headers
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Music => "Music",
            MediaKind::Video => "Videos",
            MediaKind::Photo => "Photos",
        }
    }

    /// Parse a kind from either the singular or the store's plural form
    pub fn parse(s: &str) -> Option<MediaKind> {
        match s.to_ascii_lowercase().as_str() {
            "music" => Some(MediaKind::Music),
            "video" | "videos" => Some(MediaKind::Video),
            "photo" | "photos" => Some(MediaKind::Photo),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaKind::parse(s).ok_or_else(|| format!("unknown media kind '{s}'"))
    }
}

/// Classify a filename into a media kind by its extension
///
/// Anything unrecognized (including a missing extension) falls back to
/// music; the store only holds supported kinds, so this is not an error.
pub fn classify(filename: &str) -> MediaKind {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp3" => MediaKind::Music,
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" => MediaKind::Photo,
        "mp4" | "mov" | "avi" | "mkv" | "webm" => MediaKind::Video,
        _ => MediaKind::Music,
    }
}

/// A single catalog entry
///
/// Names are unique within a kind. The kind is either supplied by the
/// store (bookmark rows) or recovered via [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub name: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(name: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Build an item whose kind is inferred from its filename
    pub fn classified(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = classify(&name);
        Self { name, kind }
    }
}
