//! Asset source implementations.

pub mod file;
pub mod http;
pub mod memory;

pub use file::FileAssetSource;
pub use http::HttpAssetSource;
pub use memory::MemoryAssetSource;

use assetdrive_core::traits::AssetRecord;

/// Keeps records whose display name or public id contains `search`,
/// ignoring case. `None` or a blank term keeps everything.
pub(crate) fn filter_records(records: Vec<AssetRecord>, search: Option<&str>) -> Vec<AssetRecord> {
    let Some(needle) = search.map(str::trim).filter(|s| !s.is_empty()) else {
        return records;
    };
    let needle = needle.to_lowercase();
    records
        .into_iter()
        .filter(|r| {
            r.display_name.to_lowercase().contains(&needle)
                || r.public_id.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Body of an asset listing: either a bare record array or the host's
/// search response with the records under `resources`.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum AssetListBody {
    /// A JSON array of records.
    Records(Vec<AssetRecord>),
    /// A search response envelope.
    Envelope {
        /// Matching records.
        resources: Vec<AssetRecord>,
    },
}

impl AssetListBody {
    pub(crate) fn into_records(self) -> Vec<AssetRecord> {
        match self {
            Self::Records(records) | Self::Envelope { resources: records } => records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_accepts_array_and_envelope() {
        let array: AssetListBody = serde_json::from_str(r#"[{"public_id": "a"}]"#).unwrap();
        assert_eq!(array.into_records().len(), 1);

        let envelope: AssetListBody =
            serde_json::from_str(r#"{"total_count": 2, "resources": [{"public_id": "a"}, {"public_id": "b"}]}"#)
                .unwrap();
        assert_eq!(envelope.into_records().len(), 2);
    }
}
