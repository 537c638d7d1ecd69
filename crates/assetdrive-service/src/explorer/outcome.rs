//! Per-operation results returned by the explorer state.

use thiserror::Error;

use assetdrive_core::events::{EventPayload, FileEvent, FolderEvent};
use assetdrive_core::types::FolderId;

/// Result of one explorer operation.
///
/// Operations never fail hard: a mutation either applies and reports what
/// happened, or is rejected and leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation changed the state.
    Applied(EventPayload),
    /// The operation was ignored.
    Rejected(Rejection),
}

impl Outcome {
    /// Whether the operation changed the state.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The emitted event, if the operation applied.
    pub fn event(&self) -> Option<&EventPayload> {
        match self {
            Self::Applied(event) => Some(event),
            Self::Rejected(_) => None,
        }
    }

    /// The reason the operation was ignored, if it was.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Applied(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

impl From<FolderEvent> for Outcome {
    fn from(event: FolderEvent) -> Self {
        Self::Applied(event.into())
    }
}

impl From<FileEvent> for Outcome {
    fn from(event: FileEvent) -> Self {
        Self::Applied(event.into())
    }
}

impl From<Rejection> for Outcome {
    fn from(reason: Rejection) -> Self {
        Self::Rejected(reason)
    }
}

/// Why an operation was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No folder with this id exists.
    #[error("folder {0} does not exist")]
    UnknownFolder(FolderId),
    /// The requested parent folder does not exist.
    #[error("parent folder {0} does not exist")]
    UnknownParent(FolderId),
    /// The folder holds no file with this id.
    #[error("file '{file_id}' is not in folder {folder_id}")]
    UnknownFile {
        /// Folder that was searched.
        folder_id: FolderId,
        /// Missing file id.
        file_id: String,
    },
    /// The supplied name is empty or whitespace.
    #[error("name cannot be empty")]
    BlankName,
    /// An uploaded asset carried no public id.
    #[error("asset has no public id")]
    MissingFileId,
    /// A bulk operation was given no files.
    #[error("no files selected")]
    NoFilesSelected,
    /// The operation needs a selected folder.
    #[error("no folder selected")]
    NoFolderSelected,
}
