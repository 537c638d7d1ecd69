//! Asset source reading a JSON export from the local filesystem.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use assetdrive_core::error::{AppError, ErrorKind};
use assetdrive_core::result::AppResult;
use assetdrive_core::traits::{AssetRecord, AssetSource};

use super::filter_records;
use super::AssetListBody;

/// Asset source reading a JSON array of records from disk.
///
/// The file is re-read on every listing so edits show up on the next
/// refresh. Search is applied locally.
#[derive(Debug, Clone)]
pub struct FileAssetSource {
    path: PathBuf,
}

impl FileAssetSource {
    /// Create a file source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl AssetSource for FileAssetSource {
    fn source_type(&self) -> &str {
        "file"
    }

    async fn list_assets(&self, search: Option<&str>) -> AppResult<Vec<AssetRecord>> {
        let data = fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Asset file not found: {}", self.path.display()))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read asset file: {}", self.path.display()),
                    e,
                )
            }
        })?;

        let body: AssetListBody = serde_json::from_slice(&data)?;
        let records = body.into_records();
        debug!(path = %self.path.display(), records = records.len(), "Read asset file");

        Ok(filter_records(records, search))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"public_id": "a/cat", "asset_folder": "a", "display_name": "cat"}},
                {{"publicId": "dog", "displayName": "Dog"}}]"#
        )
        .unwrap();

        let source = FileAssetSource::new(file.path());
        let records = source.list_assets(None).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].display_name, "Dog");

        let hits = source.list_assets(Some("dog")).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let source = FileAssetSource::new("/definitely/not/here.json");
        let err = source.list_assets(None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_malformed_json_is_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = FileAssetSource::new(file.path())
            .list_assets(None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
