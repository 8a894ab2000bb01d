//! A single box-art artifact from the cache.

use serde::Serialize;

use crate::matching::normalize::{file_stem, normalize_key};

/// One artwork file available for a game on a platform.
///
/// `normalized_key` is derived from the filename stem when the entry is
/// created and never recomputed. The locator fields are opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkEntry {
    pub platform_folder: String,
    pub filename: String,
    pub normalized_key: String,
    pub primary_url: String,
    pub secondary_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<String>,
}

impl ArtworkEntry {
    pub fn new(
        platform_folder: impl Into<String>,
        filename: impl Into<String>,
        primary_url: impl Into<String>,
        secondary_url: impl Into<String>,
    ) -> Self {
        let filename = filename.into();
        let normalized_key = normalize_key(file_stem(&filename));
        Self {
            platform_folder: platform_folder.into(),
            filename,
            normalized_key,
            primary_url: primary_url.into(),
            secondary_url: secondary_url.into(),
            absolute_path: None,
        }
    }

    pub fn with_absolute_path(mut self, path: impl Into<String>) -> Self {
        self.absolute_path = Some(path.into());
        self
    }

    /// Filename without its extension.
    pub fn stem(&self) -> &str {
        file_stem(&self.filename)
    }
}
