//! Explorer model configuration.

use serde::{Deserialize, Serialize};

use crate::types::{SortKey, ViewMode};

/// Folder tree construction and listing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Display name of the implicit folder holding assets with an empty path.
    #[serde(default = "default_root_folder_name")]
    pub root_folder_name: String,
    /// Upper bound on breadcrumb length; also stops walks over cyclic parents.
    #[serde(default = "default_breadcrumb_max_depth")]
    pub breadcrumb_max_depth: usize,
    /// Initial sort key.
    #[serde(default)]
    pub default_sort: SortKey,
    /// Initial view mode.
    #[serde(default)]
    pub default_view: ViewMode,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            root_folder_name: default_root_folder_name(),
            breadcrumb_max_depth: default_breadcrumb_max_depth(),
            default_sort: SortKey::default(),
            default_view: ViewMode::default(),
        }
    }
}

fn default_root_folder_name() -> String {
    "Home".to_string()
}

fn default_breadcrumb_max_depth() -> usize {
    20
}
