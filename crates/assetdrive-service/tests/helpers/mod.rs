//! Shared fixtures for explorer integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use assetdrive_core::config::explorer::ExplorerConfig;
use assetdrive_core::traits::AssetRecord;
use assetdrive_core::types::FolderId;
use assetdrive_entity::folder::Folder;
use assetdrive_service::ExplorerState;

/// Build an asset record with sensible defaults.
pub fn asset(public_id: &str, folder: &str) -> AssetRecord {
    AssetRecord {
        public_id: public_id.to_string(),
        display_name: format!("{public_id}.jpg"),
        asset_folder: folder.to_string(),
        resource_type: "image".to_string(),
        bytes: 1_000,
        uploaded_at: "2024-02-01T09:00:00Z".to_string(),
        created_at: String::new(),
        format: "jpg".to_string(),
        secure_url: format!("https://res.example.com/{public_id}.jpg"),
        width: 800,
        height: 600,
    }
}

/// A small library spread over nested and root-level paths.
pub fn library() -> Vec<AssetRecord> {
    vec![
        asset("p1", "photos"),
        asset("p2", "photos/2023"),
        asset("p3", "photos/2023"),
        asset("p4", "photos/2024/summer"),
        asset("d1", "docs"),
        asset("x1", "x/a"),
        asset("y1", "y/a"),
        asset("r1", ""),
    ]
}

/// An explorer state loaded with `records` through the fetch path.
pub fn loaded(records: Vec<AssetRecord>) -> ExplorerState {
    let mut state = ExplorerState::new(&ExplorerConfig::default());
    let ticket = state.begin_fetch();
    state.apply_fetch(ticket, Ok(records));
    state
}

/// Resolve a path or panic with a readable message.
pub fn folder_at(state: &ExplorerState, path: &str) -> FolderId {
    state
        .find_by_path(path)
        .unwrap_or_else(|| panic!("no folder at '{path}'"))
        .id
}

/// Every file id across all folders.
pub fn all_file_ids(folders: &[Folder]) -> Vec<String> {
    folders
        .iter()
        .flat_map(|f| f.files.iter().map(|file| file.id.clone()))
        .collect()
}

/// Sorted `(path, sorted file ids)` pairs, one per folder. Paths come from
/// the breadcrumb chain; the implicit root is reported as the empty path.
pub fn layout(state: &ExplorerState) -> Vec<(String, Vec<String>)> {
    let mut entries: Vec<(String, Vec<String>)> = state
        .folders()
        .iter()
        .map(|folder| {
            let path = if Some(folder.id) == state.implicit_root() {
                String::new()
            } else {
                state
                    .breadcrumbs_for(folder.id)
                    .into_iter()
                    .map(|f| f.name.as_str())
                    .collect::<Vec<_>>()
                    .join("/")
            };
            let mut files: Vec<String> = folder.files.iter().map(|f| f.id.clone()).collect();
            files.sort();
            (path, files)
        })
        .collect();
    entries.sort();
    entries
}

/// Asserts the parent relation forms a forest over `folders`.
pub fn assert_forest(folders: &[Folder]) {
    let ids: HashSet<FolderId> = folders.iter().map(|f| f.id).collect();
    assert_eq!(ids.len(), folders.len(), "duplicate folder ids");

    for folder in folders {
        if let Some(parent) = folder.parent_id {
            assert!(ids.contains(&parent), "dangling parent on '{}'", folder.name);
        }

        let mut seen = HashSet::from([folder.id]);
        let mut current = folder.parent_id;
        while let Some(id) = current {
            assert!(seen.insert(id), "cycle through '{}'", folder.name);
            current = folders.iter().find(|f| f.id == id).and_then(|f| f.parent_id);
        }
    }
}
