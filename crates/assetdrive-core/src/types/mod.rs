//! Core type definitions used across the AssetDrive workspace.

pub mod id;
pub mod sorting;
pub mod view;

pub use id::FolderId;
pub use sorting::SortKey;
pub use view::ViewMode;
