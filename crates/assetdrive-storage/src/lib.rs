//! # assetdrive-storage
//!
//! Asset source implementations for AssetDrive: the host's list-assets
//! HTTP endpoint, a JSON export on disk, and an in-memory fixture list.
//! Also builds delivery URLs for transformed previews.

pub mod delivery;
pub mod manager;
pub mod providers;

pub use delivery::delivery_url;
pub use manager::SourceManager;
