//! Explorer events emitted by successful state mutations.
//!
//! The explorer state returns one event per applied operation instead of
//! driving notifications or dialogs itself; the presentation layer maps
//! events to whatever feedback mechanism it uses.

pub mod file;
pub mod folder;

use serde::{Deserialize, Serialize};

pub use file::FileEvent;
pub use folder::FolderEvent;

/// Union of all explorer event types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A folder-related event.
    Folder(FolderEvent),
    /// A file-related event.
    File(FileEvent),
}

impl From<FolderEvent> for EventPayload {
    fn from(event: FolderEvent) -> Self {
        Self::Folder(event)
    }
}

impl From<FileEvent> for EventPayload {
    fn from(event: FileEvent) -> Self {
        Self::File(event)
    }
}
