//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field has a serde default so an empty file is valid.

pub mod explorer;
pub mod logging;
pub mod source;

use serde::{Deserialize, Serialize};

use self::explorer::ExplorerConfig;
use self::logging::LoggingConfig;
use self::source::SourceConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for `config/default.toml`, an
/// optional overlay file, and `ASSETDRIVE__*` environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the asset list is fetched from.
    #[serde(default)]
    pub source: SourceConfig,
    /// Folder tree and listing defaults.
    #[serde(default)]
    pub explorer: ExplorerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default` with the file at `path` (both optional) and
    /// environment variables prefixed with `ASSETDRIVE__`, e.g.
    /// `ASSETDRIVE__SOURCE__BASE_URL`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("ASSETDRIVE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
