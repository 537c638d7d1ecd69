//! File-related explorer events.

use serde::{Deserialize, Serialize};

use crate::types::FolderId;

/// Events related to file operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FileEvent {
    /// An uploaded asset was placed into a folder.
    Inserted {
        /// The file ID (asset public id).
        file_id: String,
        /// The folder that received it.
        folder_id: FolderId,
        /// Folders created on the way, outermost first.
        created_folders: Vec<FolderId>,
    },
    /// A file was renamed.
    Renamed {
        /// The file ID.
        file_id: String,
        /// The folder containing it.
        folder_id: FolderId,
        /// The new name.
        name: String,
    },
    /// A single file was deleted.
    Deleted {
        /// The file ID.
        file_id: String,
        /// The folder it was in.
        folder_id: FolderId,
    },
    /// Several files were deleted from one folder in a single pass.
    BulkDeleted {
        /// The folder they were in.
        folder_id: FolderId,
        /// Number of files actually removed.
        count: usize,
    },
}
