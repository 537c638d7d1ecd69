//! Convenience result type alias for AssetDrive.

use crate::error::AppError;

/// A specialized `Result` type for AssetDrive operations.
pub type AppResult<T> = Result<T, AppError>;
