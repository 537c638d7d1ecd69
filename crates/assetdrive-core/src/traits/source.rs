//! Asset source trait for pluggable asset-list backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// One remote asset as reported by the hosting service.
///
/// Field names follow the host's snake_case JSON; camelCase aliases are
/// accepted so records produced by browser-side widgets deserialize too.
/// The record is read-only from AssetDrive's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Host-assigned unique id; becomes the file id.
    #[serde(alias = "publicId")]
    pub public_id: String,
    /// Human-readable name.
    #[serde(default, alias = "displayName")]
    pub display_name: String,
    /// Slash-delimited folder path; empty for root-level assets.
    #[serde(default, alias = "assetFolder")]
    pub asset_folder: String,
    /// Host resource type (`image`, `video`, `raw`).
    #[serde(default, alias = "resourceType")]
    pub resource_type: String,
    /// Size in bytes.
    #[serde(default)]
    pub bytes: u64,
    /// Upload timestamp as sent by the host.
    #[serde(default, alias = "uploadedAt")]
    pub uploaded_at: String,
    /// Creation timestamp; used when `uploaded_at` is absent.
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
    /// File format / extension without the dot.
    #[serde(default)]
    pub format: String,
    /// HTTPS delivery URL.
    #[serde(default, alias = "secureUrl")]
    pub secure_url: String,
    /// Pixel width (0 for non-visual assets).
    #[serde(default)]
    pub width: u32,
    /// Pixel height (0 for non-visual assets).
    #[serde(default)]
    pub height: u32,
}

impl AssetRecord {
    /// The best available timestamp for this asset.
    pub fn timestamp(&self) -> &str {
        if self.uploaded_at.is_empty() {
            &self.created_at
        } else {
            &self.uploaded_at
        }
    }
}

/// Trait for asset-list backends.
///
/// Implementations exist for the HTTP list-assets endpoint, a JSON file on
/// disk, and an in-memory fixture list. Failures are reported as
/// [`AppError`](crate::error::AppError) values so the caller can show an
/// error state instead of crashing.
#[async_trait]
pub trait AssetSource: Send + Sync + std::fmt::Debug + 'static {
    /// Return the source type name (e.g., "http", "file").
    fn source_type(&self) -> &str;

    /// List assets, optionally narrowed by a host-side search term.
    async fn list_assets(&self, search: Option<&str>) -> AppResult<Vec<AssetRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_record() {
        let json = r#"{
            "public_id": "samples/cat",
            "display_name": "cat",
            "asset_folder": "samples",
            "resource_type": "image",
            "bytes": 1024,
            "created_at": "2024-05-01T10:00:00Z",
            "format": "jpg",
            "secure_url": "https://res.example.com/cat.jpg",
            "width": 640,
            "height": 480
        }"#;
        let record: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.public_id, "samples/cat");
        assert!(record.uploaded_at.is_empty());
        assert_eq!(record.timestamp(), "2024-05-01T10:00:00Z");
        assert_eq!(record.width, 640);
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_fields() {
        let json = r#"{"publicId": "x1", "assetFolder": "a/b"}"#;
        let record: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.asset_folder, "a/b");
        assert_eq!(record.bytes, 0);
        assert!(record.display_name.is_empty());
    }
}
