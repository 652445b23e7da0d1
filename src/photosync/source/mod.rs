//! # Remote Asset Store
//!
//! This module abstracts the remote media library behind the [`AssetSource`]
//! trait so the sync pipeline never talks to the network directly.
//!
//! ## Implementations
//!
//! - [`cloudinary::CloudinarySource`]: Production client for the Cloudinary
//!   Admin API (blocking HTTP, basic auth, one bounded page per listing).
//! - [`memory::InMemorySource`]: Fixture-backed source for tests. Mimics the
//!   prefix semantics of the real listing call, including the quirk that a
//!   prefix query also returns assets nested in subfolders.
//!
//! ## Listing Contract
//!
//! A source answers two questions: which top-level folders exist, and which
//! upload-type assets live under a given folder prefix. The root of the
//! library is addressed as the empty folder path. Both calls are single
//! bounded pages; there is no pagination.

use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub mod cloudinary;
pub mod memory;

/// One raw upstream record from the asset store's resource listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Asset {
    pub public_id: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub image_metadata: BTreeMap<String, Value>,
}

impl Asset {
    /// Folder containing this asset, derived from its public_id: everything
    /// before the last '/', or empty when the id has no separator.
    pub fn folder(&self) -> &str {
        match self.public_id.rfind('/') {
            Some(idx) => &self.public_id[..idx],
            None => "",
        }
    }

    /// An EXIF value rendered as a plain string. Upstream values arrive as
    /// JSON strings or numbers depending on the tag; empty strings count as
    /// absent.
    pub fn meta(&self, key: &str) -> Option<String> {
        match self.image_metadata.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// A surviving (asset, folder) pair from a fetch pass.
#[derive(Debug, Clone)]
pub struct FetchedAsset {
    pub asset: Asset,
    pub folder: String,
}

/// Abstract interface to the remote asset store.
///
/// Any error from either call aborts the whole sync; partial listings are
/// never merged.
pub trait AssetSource {
    /// List top-level folder paths (single bounded page).
    fn folders(&self) -> Result<Vec<String>>;

    /// List upload-type assets under `folder`, metadata included
    /// (single bounded page).
    fn assets_in(&self, folder: &str) -> Result<Vec<Asset>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn folder_is_everything_before_the_last_separator() {
        let mut asset = Asset::default();

        asset.public_id = "travel/japan/kyoto-01".to_string();
        assert_eq!(asset.folder(), "travel/japan");

        asset.public_id = "portrait-01".to_string();
        assert_eq!(asset.folder(), "");
    }

    #[test]
    fn meta_renders_strings_and_numbers() {
        let asset = Asset {
            public_id: "p".to_string(),
            image_metadata: BTreeMap::from([
                ("Model".to_string(), json!("X-T5")),
                ("FNumber".to_string(), json!(2.8)),
                ("ISO".to_string(), json!(400)),
                ("LensModel".to_string(), json!("")),
            ]),
            ..Asset::default()
        };

        assert_eq!(asset.meta("Model").as_deref(), Some("X-T5"));
        assert_eq!(asset.meta("FNumber").as_deref(), Some("2.8"));
        assert_eq!(asset.meta("ISO").as_deref(), Some("400"));
        assert_eq!(asset.meta("LensModel"), None);
        assert_eq!(asset.meta("ExposureTime"), None);
    }

    #[test]
    fn asset_deserializes_from_admin_api_shape() {
        let raw = json!({
            "public_id": "nature/forest-walk",
            "width": 4000,
            "height": 3000,
            "created_at": "2024-05-12T10:00:00Z",
            "filename": "forest-walk",
            "image_metadata": {"Model": "X100V", "ISO": 200},
            "format": "jpg",
            "bytes": 123456
        });

        let asset: Asset = serde_json::from_value(raw).unwrap();
        assert_eq!(asset.public_id, "nature/forest-walk");
        assert_eq!(asset.width, 4000);
        assert_eq!(asset.created_at.as_deref(), Some("2024-05-12T10:00:00Z"));
        assert_eq!(asset.meta("Model").as_deref(), Some("X100V"));
    }
}
