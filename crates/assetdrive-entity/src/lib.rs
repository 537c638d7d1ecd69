//! # assetdrive-entity
//!
//! Explorer data model for AssetDrive. Files are derived 1:1 from remote
//! asset records, folders are synthesized from asset paths, and the tree
//! types give a nested view of the flat folder collection.

pub mod file;
pub mod folder;
pub mod transform;

pub use assetdrive_core::traits::AssetRecord;
