//! File kind classification by extension.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad category of a file, used for icons and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// PDF document.
    Pdf,
    /// Word processor document.
    Word,
    /// Spreadsheet.
    Excel,
    /// Slide deck.
    Powerpoint,
    /// Raster or vector image.
    Image,
    /// Video clip.
    Video,
    /// Audio track.
    Audio,
    /// Compressed archive.
    Archive,
    /// Source code or structured text.
    Code,
    /// Plain text.
    Text,
    /// Design tool document.
    Design,
    /// Font file.
    Font,
    /// Anything else.
    #[default]
    File,
}

impl FileKind {
    /// Classify a bare extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim().to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::Word,
            "xls" | "xlsx" => Self::Excel,
            "ppt" | "pptx" => Self::Powerpoint,
            "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" | "avif" => Self::Image,
            "mp4" | "avi" | "mov" | "webm" => Self::Video,
            "mp3" | "wav" | "ogg" => Self::Audio,
            "zip" | "rar" | "7z" => Self::Archive,
            "js" | "ts" | "css" | "html" | "json" | "sql" => Self::Code,
            "txt" => Self::Text,
            "fig" | "sketch" | "ase" => Self::Design,
            "ttf" | "otf" | "woff" => Self::Font,
            _ => Self::File,
        }
    }

    /// Classify a file name by its last extension.
    pub fn from_file_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Self::File,
        }
    }

    /// Return the lowercase kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::Excel => "excel",
            Self::Powerpoint => "powerpoint",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Archive => "archive",
            Self::Code => "code",
            Self::Text => "text",
            Self::Design => "design",
            Self::Font => "font",
            Self::File => "file",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileKind::from_extension("JPG"), FileKind::Image);
        assert_eq!(FileKind::from_extension("docx"), FileKind::Word);
        assert_eq!(FileKind::from_extension("woff"), FileKind::Font);
        assert_eq!(FileKind::from_extension("exe"), FileKind::File);
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(FileKind::from_file_name("report.final.pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_file_name("Makefile"), FileKind::File);
    }
}
