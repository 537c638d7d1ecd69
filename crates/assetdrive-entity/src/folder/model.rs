//! Folder entity model.

use serde::{Deserialize, Serialize};

use assetdrive_core::types::FolderId;

use crate::file::FileEntry;

/// A synthesized folder grouping assets that share a path prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier, independent of the name.
    pub id: FolderId,
    /// Folder name (last path segment).
    pub name: String,
    /// Parent folder ID (`None` for root folders).
    pub parent_id: Option<FolderId>,
    /// Files directly inside this folder, in insertion order.
    pub files: Vec<FileEntry>,
}

impl Folder {
    /// Create an empty folder with a freshly minted id.
    pub fn new(name: impl Into<String>, parent_id: Option<FolderId>) -> Self {
        Self {
            id: FolderId::new(),
            name: name.into(),
            parent_id,
            files: Vec::new(),
        }
    }

    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Look up a file by id.
    pub fn file(&self, file_id: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.id == file_id)
    }

    /// Whether a file with this id lives here.
    pub fn contains_file(&self, file_id: &str) -> bool {
        self.file(file_id).is_some()
    }
}
