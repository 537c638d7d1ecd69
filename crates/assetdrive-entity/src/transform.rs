//! Transform requests handed to the asset host's renderer.
//!
//! AssetDrive never transforms pixels itself; it only names the file and
//! the effects to apply.

use serde::{Deserialize, Serialize};

/// Effects the renderer should apply to a preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformFlags {
    /// Strip the background.
    #[serde(default)]
    pub remove_background: bool,
    /// Render in grayscale.
    #[serde(default)]
    pub grayscale: bool,
    /// Generative background replacement prompt; blank means none.
    #[serde(default)]
    pub replace_background: Option<String>,
}

impl TransformFlags {
    /// The replacement prompt, if one with content is set.
    pub fn background_prompt(&self) -> Option<&str> {
        self.replace_background
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Whether no effect is requested.
    pub fn is_identity(&self) -> bool {
        !self.remove_background && !self.grayscale && self.background_prompt().is_none()
    }
}

/// A transform request for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    /// The file (asset public id) to render.
    pub file_id: String,
    /// Requested effects.
    pub flags: TransformFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prompt_is_ignored() {
        let flags = TransformFlags {
            replace_background: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(flags.background_prompt().is_none());
        assert!(flags.is_identity());
    }

    #[test]
    fn test_grayscale_is_not_identity() {
        let flags = TransformFlags {
            grayscale: true,
            ..Default::default()
        };
        assert!(!flags.is_identity());
    }
}
