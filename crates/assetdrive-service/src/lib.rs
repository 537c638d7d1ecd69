//! # assetdrive-service
//!
//! The explorer model for AssetDrive. [`TreeBuilder`] turns a flat list of
//! remote assets into a folder forest; [`ExplorerState`] owns the folder
//! collection together with selection and view preferences and exposes
//! every folder/file operation as a total function returning an
//! [`Outcome`].

pub mod collation;
pub mod explorer;
pub mod folder;

pub use explorer::{
    DeletePreview, ExplorerState, FetchOutcome, FetchTicket, ListingSummary, LoadStatus, Outcome,
    Rejection,
};
pub use folder::{BuiltFolders, TreeBuilder};
