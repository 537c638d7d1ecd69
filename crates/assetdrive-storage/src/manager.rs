//! Source manager: picks the configured asset source and builds delivery
//! URLs with the configured cloud name.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use assetdrive_core::config::source::{SourceConfig, SourceKind};
use assetdrive_core::result::AppResult;
use assetdrive_core::traits::AssetSource;
use assetdrive_entity::transform::TransformRequest;

use crate::delivery::delivery_url;
use crate::providers::{FileAssetSource, HttpAssetSource};

/// Holds the active asset source.
#[derive(Debug, Clone)]
pub struct SourceManager {
    source: Arc<dyn AssetSource>,
    cloud_name: String,
}

impl SourceManager {
    /// Wrap an already constructed source.
    pub fn new(source: Arc<dyn AssetSource>, cloud_name: impl Into<String>) -> Self {
        Self {
            source,
            cloud_name: cloud_name.into(),
        }
    }

    /// Build the source selected by `config.kind`.
    pub fn from_config(config: &SourceConfig) -> AppResult<Self> {
        let source: Arc<dyn AssetSource> = match config.kind {
            SourceKind::Http => Arc::new(HttpAssetSource::from_config(config)?),
            SourceKind::File => Arc::new(FileAssetSource::new(&config.file_path)),
        };
        info!(source = source.source_type(), "Asset source initialized");
        Ok(Self::new(source, config.cloud_name.clone()))
    }

    /// Use a JSON file regardless of the configured kind.
    pub fn from_file(path: impl Into<PathBuf>, config: &SourceConfig) -> Self {
        let source = FileAssetSource::new(path);
        info!(path = %source.path().display(), "Asset source overridden with file");
        Self::new(Arc::new(source), config.cloud_name.clone())
    }

    /// The active source.
    pub fn source(&self) -> Arc<dyn AssetSource> {
        Arc::clone(&self.source)
    }

    /// Delivery URL for a transform request.
    pub fn delivery_url(&self, request: &TransformRequest) -> AppResult<String> {
        delivery_url(&self.cloud_name, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_selects_kind() {
        let http = SourceManager::from_config(&SourceConfig::default()).unwrap();
        assert_eq!(http.source().source_type(), "http");

        let file = SourceManager::from_config(&SourceConfig {
            kind: SourceKind::File,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(file.source().source_type(), "file");
    }

    #[test]
    fn test_file_override() {
        let manager = SourceManager::from_file("assets.json", &SourceConfig::default());
        assert_eq!(manager.source().source_type(), "file");
    }
}
