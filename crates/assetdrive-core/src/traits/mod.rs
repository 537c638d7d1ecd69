//! Core traits defined in `assetdrive-core` and implemented by other crates.

pub mod source;

pub use source::{AssetRecord, AssetSource};
