//! Asset source configuration.

use serde::{Deserialize, Serialize};

/// Which adapter supplies the asset list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The dashboard's list-assets HTTP endpoint.
    #[default]
    Http,
    /// A JSON array of asset records on disk.
    File,
}

impl SourceKind {
    /// Return the lowercase kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::File => "file",
        }
    }
}

/// Asset list source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Adapter to use.
    #[serde(default)]
    pub kind: SourceKind,
    /// Base URL of the list-assets proxy.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the list-assets endpoint below `base_url`.
    #[serde(default = "default_assets_path")]
    pub assets_path: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// JSON file used when `kind = "file"`.
    #[serde(default = "default_file_path")]
    pub file_path: String,
    /// Cloud name used when building transform delivery URLs.
    #[serde(default)]
    pub cloud_name: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            base_url: default_base_url(),
            assets_path: default_assets_path(),
            timeout_seconds: default_timeout(),
            file_path: default_file_path(),
            cloud_name: String::new(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_assets_path() -> String {
    "/api/assets".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_file_path() -> String {
    "./data/assets.json".to_string()
}
