//! File entity model.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use assetdrive_core::traits::AssetRecord;

use super::kind::FileKind;

/// A file shown in the explorer, derived from one remote asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File identifier (the asset's public id).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Broad file category.
    pub kind: FileKind,
    /// Size in bytes.
    pub size: u64,
    /// Last-modified timestamp as reported by the host.
    pub last_modified: String,
    /// Format / extension without the dot.
    pub format: String,
    /// HTTPS delivery URL.
    pub secure_url: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

impl FileEntry {
    /// Parse `last_modified` into a UTC timestamp.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`. Anything
    /// else yields `None`.
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_modified)
    }

    /// Get the file extension (lowercase), preferring the host format.
    pub fn extension(&self) -> Option<String> {
        if !self.format.is_empty() {
            return Some(self.format.to_lowercase());
        }
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }

    /// Format the size for display, e.g. `2.5 MB`.
    pub fn human_size(&self) -> String {
        const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
        let mut value = self.size as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{} {}", self.size, UNITS[0])
        } else {
            format!("{value:.1} {}", UNITS[unit])
        }
    }
}

impl From<&AssetRecord> for FileEntry {
    fn from(record: &AssetRecord) -> Self {
        let name = if record.display_name.trim().is_empty() {
            record
                .public_id
                .rsplit('/')
                .next()
                .unwrap_or(&record.public_id)
                .to_string()
        } else {
            record.display_name.clone()
        };
        let kind = if record.format.is_empty() {
            FileKind::from_file_name(&name)
        } else {
            FileKind::from_extension(&record.format)
        };

        Self {
            id: record.public_id.clone(),
            name,
            kind,
            size: record.bytes,
            last_modified: record.timestamp().to_string(),
            format: record.format.clone(),
            secure_url: record.secure_url.clone(),
            width: record.width,
            height: record.height,
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
