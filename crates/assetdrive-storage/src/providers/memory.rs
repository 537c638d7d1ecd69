//! In-memory asset source backed by a fixed record list.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use assetdrive_core::result::AppResult;
use assetdrive_core::traits::{AssetRecord, AssetSource};

use super::filter_records;

/// Asset source serving a record list held in memory.
///
/// Cloning shares the same list, so records pushed through one handle are
/// visible through every other.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    records: Arc<RwLock<Vec<AssetRecord>>>,
}

impl MemoryAssetSource {
    /// Create a source serving `records`.
    pub fn new(records: Vec<AssetRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Append a record, as the host would after an upload.
    pub async fn push(&self, record: AssetRecord) {
        self.records.write().await.push(record);
    }

    /// Number of records held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether no records are held.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AssetSource for MemoryAssetSource {
    fn source_type(&self) -> &str {
        "memory"
    }

    async fn list_assets(&self, search: Option<&str>) -> AppResult<Vec<AssetRecord>> {
        let records = self.records.read().await.clone();
        Ok(filter_records(records, search))
    }
}
