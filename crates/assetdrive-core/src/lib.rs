//! # assetdrive-core
//!
//! Core crate for AssetDrive. Contains the asset source trait,
//! configuration schemas, typed identifiers, explorer events,
//! view preference enums, and the unified error system.
//!
//! This crate has **no** internal dependencies on other AssetDrive crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
