//! Filtered and sorted file listings for the selected folder.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use assetdrive_core::types::SortKey;
use assetdrive_entity::file::FileEntry;

use super::state::ExplorerState;
use crate::collation::compare_names;

/// File counts shown above a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    /// Files matching the search query.
    pub visible: usize,
    /// Files in the folder.
    pub total: usize,
    /// Whether a search query is narrowing the listing.
    pub filtered: bool,
}

impl ExplorerState {
    /// Files of the selected folder whose name contains the search query,
    /// ignoring case. Empty when no folder is selected.
    pub fn visible_files(&self) -> Vec<&FileEntry> {
        let Some(folder) = self.current_folder() else {
            return Vec::new();
        };
        let needle = self.search_query.to_lowercase();
        folder
            .files
            .iter()
            .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// [`visible_files`](Self::visible_files) ordered by the current sort key.
    pub fn sorted_files(&self) -> Vec<&FileEntry> {
        let mut files = self.visible_files();
        sort_files(&mut files, self.sort_by);
        files
    }

    /// Visible and total file counts for the selected folder.
    pub fn listing_summary(&self) -> Option<ListingSummary> {
        let folder = self.current_folder()?;
        Some(ListingSummary {
            visible: self.visible_files().len(),
            total: folder.files.len(),
            filtered: !self.search_query.is_empty(),
        })
    }
}

/// Stable in-place sort of a file listing.
pub fn sort_files(files: &mut [&FileEntry], key: SortKey) {
    files.sort_by(|a, b| compare_files(a, b, key));
}

/// Compare two files for the given key.
///
/// Names ascend; sizes and dates descend. Files whose date does not parse
/// come after every dated file and compare equal to each other.
pub fn compare_files(a: &FileEntry, b: &FileEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Size => b.size.cmp(&a.size),
        SortKey::Date => match (a.modified_at(), b.modified_at()) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdrive_core::config::explorer::ExplorerConfig;
    use assetdrive_entity::file::FileKind;
    use assetdrive_entity::folder::Folder;

    fn file(id: &str, name: &str, size: u64, date: &str) -> FileEntry {
        FileEntry {
            id: id.to_string(),
            name: name.to_string(),
            kind: FileKind::from_file_name(name),
            size,
            last_modified: date.to_string(),
            format: String::new(),
            secure_url: String::new(),
            width: 0,
            height: 0,
        }
    }

    fn state_with(files: Vec<FileEntry>) -> ExplorerState {
        let mut folder = Folder::new("photos", None);
        folder.files = files;
        let id = folder.id;
        let mut state = ExplorerState::with_folders(&ExplorerConfig::default(), vec![folder]);
        state.select_folder(Some(id));
        state
    }

    fn ids(files: &[&FileEntry]) -> Vec<String> {
        files.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn test_no_selection_lists_nothing() {
        let state = ExplorerState::default();
        assert!(state.sorted_files().is_empty());
        assert!(state.listing_summary().is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut state = state_with(vec![
            file("1", "Beach.JPG", 1, ""),
            file("2", "mountain.png", 1, ""),
            file("3", "beachball.gif", 1, ""),
        ]);
        state.set_search_query("BEACH");
        assert_eq!(ids(&state.visible_files()), vec!["1", "3"]);
        assert_eq!(
            state.listing_summary(),
            Some(ListingSummary {
                visible: 2,
                total: 3,
                filtered: true
            })
        );
    }

    #[test]
    fn test_sort_by_size_descending() {
        let mut state = state_with(vec![
            file("a", "a", 300, ""),
            file("b", "b", 100, ""),
            file("c", "c", 200, ""),
        ]);
        state.set_sort_by(SortKey::Size);
        let sizes: Vec<u64> = state.sorted_files().iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![300, 200, 100]);
    }

    #[test]
    fn test_sort_by_name_locale_style() {
        let mut state = state_with(vec![
            file("1", "zebra.png", 1, ""),
            file("2", "Apple.png", 1, ""),
            file("3", "banana.png", 1, ""),
        ]);
        state.set_sort_by(SortKey::Name);
        assert_eq!(ids(&state.sorted_files()), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_by_date_puts_invalid_last() {
        let mut state = state_with(vec![
            file("bad", "bad", 1, "not a date"),
            file("old", "old", 1, "2023-01-01T00:00:00Z"),
            file("new", "new", 1, "2024-06-01T00:00:00Z"),
        ]);
        state.set_sort_by(SortKey::Date);
        assert_eq!(ids(&state.sorted_files()), vec!["new", "old", "bad"]);
    }

    #[test]
    fn test_invalid_dates_compare_equal() {
        let a = file("a", "a", 1, "??");
        let b = file("b", "b", 1, "");
        assert_eq!(compare_files(&a, &b, SortKey::Date), Ordering::Equal);
        let dated = file("c", "c", 1, "2024-01-01");
        assert_eq!(compare_files(&a, &dated, SortKey::Date), Ordering::Greater);
        assert_eq!(compare_files(&dated, &a, SortKey::Date), Ordering::Less);
    }
}
