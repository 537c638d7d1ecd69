//! Sort keys for file listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Field a file listing is ordered by.
///
/// Each key carries its own direction: names ascend, dates and sizes
/// descend (newest and largest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Locale-style ascending by file name.
    #[default]
    Name,
    /// Newest first by last-modified timestamp.
    Date,
    /// Largest first by byte count.
    Size,
}

impl SortKey {
    /// Return the lowercase key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Size => "size",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "date" => Ok(Self::Date),
            "size" => Ok(Self::Size),
            other => Err(AppError::validation(format!(
                "Unknown sort key '{other}' (expected name, date or size)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("Size".parse::<SortKey>().unwrap(), SortKey::Size);
        assert_eq!(" date ".parse::<SortKey>().unwrap(), SortKey::Date);
        assert!("color".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SortKey::Date).unwrap();
        assert_eq!(json, "\"date\"");
    }
}
