//! Folder-related explorer events.

use serde::{Deserialize, Serialize};

use crate::types::FolderId;

/// Events related to folder operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FolderEvent {
    /// The selected folder changed.
    Selected {
        /// The new selection (`None` shows no folder).
        folder_id: Option<FolderId>,
    },
    /// A folder was created locally.
    Created {
        /// The new folder ID.
        folder_id: FolderId,
        /// Its parent, if any.
        parent_id: Option<FolderId>,
        /// The folder name.
        name: String,
    },
    /// A folder was renamed.
    Renamed {
        /// The folder ID.
        folder_id: FolderId,
        /// The new name.
        name: String,
    },
    /// A folder and its descendants were deleted.
    Deleted {
        /// Every removed folder, the target first.
        folder_ids: Vec<FolderId>,
        /// Number of files that were inside the removed folders.
        file_count: usize,
        /// Whether the selected folder was among the removed ones.
        selection_cleared: bool,
    },
}
