//! Explorer state and its folder/file mutations.

use std::collections::HashSet;

use tracing::{debug, info};

use assetdrive_core::config::explorer::ExplorerConfig;
use assetdrive_core::events::{FileEvent, FolderEvent};
use assetdrive_core::types::{FolderId, SortKey, ViewMode};
use assetdrive_entity::folder::Folder;

use super::fetch::LoadStatus;
use super::outcome::{Outcome, Rejection};
use crate::folder::TreeBuilder;

/// In-memory model behind the file-manager view.
///
/// Owns the folder collection, the selected folder and files, and the view
/// preferences. Every operation runs to completion on `&mut self`; invalid
/// targets are rejected without touching the state.
#[derive(Debug, Clone)]
pub struct ExplorerState {
    /// Folder collection, name-sorted when built.
    pub(crate) folders: Vec<Folder>,
    /// Selected folder; always a live id or `None`.
    pub(crate) selected_folder: Option<FolderId>,
    /// Selected file ids within the selected folder.
    pub(crate) selected_files: HashSet<String>,
    /// Case-insensitive file name filter.
    pub(crate) search_query: String,
    /// Listing order.
    pub(crate) sort_by: SortKey,
    /// Listing layout.
    pub(crate) view_mode: ViewMode,
    /// Folders expanded in the tree view.
    pub(crate) expanded: HashSet<FolderId>,
    /// Asset list load status.
    pub(crate) status: LoadStatus,
    /// Generation of the most recent fetch request.
    pub(crate) fetch_generation: u64,
    /// Folder holding root-level assets; matched by id, never by name.
    pub(crate) implicit_root: Option<FolderId>,
    /// Builder used for fetches and uploads.
    pub(crate) builder: TreeBuilder,
    /// Breadcrumb length cap.
    pub(crate) breadcrumb_max_depth: usize,
}

impl ExplorerState {
    /// Creates an empty explorer state.
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            folders: Vec::new(),
            selected_folder: None,
            selected_files: HashSet::new(),
            search_query: String::new(),
            sort_by: config.default_sort,
            view_mode: config.default_view,
            expanded: HashSet::new(),
            status: LoadStatus::Idle,
            fetch_generation: 0,
            implicit_root: None,
            builder: TreeBuilder::from_config(config),
            breadcrumb_max_depth: config.breadcrumb_max_depth,
        }
    }

    /// Creates an explorer state over an existing folder collection.
    pub fn with_folders(config: &ExplorerConfig, folders: Vec<Folder>) -> Self {
        let mut state = Self::new(config);
        state.folders = folders;
        state
    }

    /// The folder collection.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Looks up a folder by id.
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Whether a folder with this id exists.
    pub fn contains_folder(&self, id: FolderId) -> bool {
        self.folder(id).is_some()
    }

    /// The selected folder id.
    pub fn selected_folder_id(&self) -> Option<FolderId> {
        self.selected_folder
    }

    /// The selected file ids.
    pub fn selected_files(&self) -> &HashSet<String> {
        &self.selected_files
    }

    /// The current search query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The current sort key.
    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// The current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The asset list load status.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The tree builder used for fetches and uploads.
    pub fn builder(&self) -> &TreeBuilder {
        &self.builder
    }

    /// The implicit root folder, if one exists.
    pub fn implicit_root(&self) -> Option<FolderId> {
        self.implicit_root
    }

    /// The selected folder, if any.
    pub fn current_folder(&self) -> Option<&Folder> {
        self.selected_folder.and_then(|id| self.folder(id))
    }

    pub(crate) fn folder_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|f| f.id == id)
    }

    /// Selects a folder, or clears the selection with `None`.
    ///
    /// Unknown ids are rejected so a stale reference can never become the
    /// selection. A successful call always clears the file selection.
    pub fn select_folder(&mut self, id: Option<FolderId>) -> Outcome {
        if let Some(id) = id {
            if !self.contains_folder(id) {
                debug!(folder_id = %id, "Ignoring selection of unknown folder");
                return Rejection::UnknownFolder(id).into();
            }
        }

        self.selected_folder = id;
        self.selected_files.clear();

        FolderEvent::Selected { folder_id: id }.into()
    }

    /// Replaces the whole folder collection.
    ///
    /// The selection survives only if its folder is still present; the file
    /// selection, expanded set and implicit root are pruned to what still
    /// exists.
    pub fn replace_folders(&mut self, folders: Vec<Folder>) {
        self.folders = folders;
        self.implicit_root = self.implicit_root.filter(|id| self.contains_folder(*id));

        if let Some(id) = self.selected_folder {
            if !self.contains_folder(id) {
                self.selected_folder = None;
            }
        }
        self.prune_file_selection();

        let live: HashSet<FolderId> = self.folders.iter().map(|f| f.id).collect();
        self.expanded.retain(|id| live.contains(id));

        debug!(folders = self.folders.len(), "Folder collection replaced");
    }

    /// Creates an empty folder under `parent_id` (or at the root).
    ///
    /// Sibling folders may share a name.
    pub fn create_folder(&mut self, name: &str, parent_id: Option<FolderId>) -> Outcome {
        let name = name.trim();
        if name.is_empty() {
            return Rejection::BlankName.into();
        }
        if let Some(parent) = parent_id {
            if !self.contains_folder(parent) {
                return Rejection::UnknownParent(parent).into();
            }
            self.expanded.insert(parent);
        }

        let folder = Folder::new(name, parent_id);
        let folder_id = folder.id;
        self.folders.push(folder);

        info!(folder_id = %folder_id, name = %name, "Folder created");

        FolderEvent::Created {
            folder_id,
            parent_id,
            name: name.to_string(),
        }
        .into()
    }

    /// Renames a folder in place.
    pub fn rename_folder(&mut self, id: FolderId, new_name: &str) -> Outcome {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Rejection::BlankName.into();
        }
        let Some(folder) = self.folder_mut(id) else {
            return Rejection::UnknownFolder(id).into();
        };
        folder.name = new_name.to_string();

        info!(folder_id = %id, new_name = %new_name, "Folder renamed");

        FolderEvent::Renamed {
            folder_id: id,
            name: new_name.to_string(),
        }
        .into()
    }

    /// Deletes a folder, all of its descendants, and every file they hold.
    pub fn delete_folder(&mut self, id: FolderId) -> Outcome {
        if !self.contains_folder(id) {
            return Rejection::UnknownFolder(id).into();
        }

        let doomed = self.subtree_ids(id);
        let doomed_set: HashSet<FolderId> = doomed.iter().copied().collect();
        let file_count: usize = self
            .folders
            .iter()
            .filter(|f| doomed_set.contains(&f.id))
            .map(|f| f.files.len())
            .sum();

        self.folders.retain(|f| !doomed_set.contains(&f.id));
        self.expanded.retain(|f| !doomed_set.contains(f));
        self.implicit_root = self.implicit_root.filter(|id| !doomed_set.contains(id));

        let selection_cleared = self
            .selected_folder
            .is_some_and(|selected| doomed_set.contains(&selected));
        if selection_cleared {
            self.selected_folder = None;
            self.selected_files.clear();
        }

        info!(
            folder_id = %id,
            folders = doomed.len(),
            files = file_count,
            "Folder deleted"
        );

        FolderEvent::Deleted {
            folder_ids: doomed,
            file_count,
            selection_cleared,
        }
        .into()
    }

    /// Renames one file inside one folder.
    pub fn rename_file(&mut self, folder_id: FolderId, file_id: &str, new_name: &str) -> Outcome {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Rejection::BlankName.into();
        }
        let Some(folder) = self.folder_mut(folder_id) else {
            return Rejection::UnknownFolder(folder_id).into();
        };
        let Some(file) = folder.files.iter_mut().find(|f| f.id == file_id) else {
            return Rejection::UnknownFile {
                folder_id,
                file_id: file_id.to_string(),
            }
            .into();
        };
        file.name = new_name.to_string();

        info!(folder_id = %folder_id, file_id = %file_id, new_name = %new_name, "File renamed");

        FileEvent::Renamed {
            file_id: file_id.to_string(),
            folder_id,
            name: new_name.to_string(),
        }
        .into()
    }

    /// Deletes one file from one folder.
    pub fn delete_file(&mut self, folder_id: FolderId, file_id: &str) -> Outcome {
        let Some(folder) = self.folder_mut(folder_id) else {
            return Rejection::UnknownFolder(folder_id).into();
        };
        let before = folder.files.len();
        folder.files.retain(|f| f.id != file_id);
        if folder.files.len() == before {
            return Rejection::UnknownFile {
                folder_id,
                file_id: file_id.to_string(),
            }
            .into();
        }
        self.selected_files.remove(file_id);

        info!(folder_id = %folder_id, file_id = %file_id, "File deleted");

        FileEvent::Deleted {
            file_id: file_id.to_string(),
            folder_id,
        }
        .into()
    }

    /// Deletes every listed file from one folder in a single pass.
    ///
    /// Ids not present in the folder are skipped; the event reports how many
    /// files were actually removed. The file selection is cleared, even when
    /// the id set is empty and nothing is deleted.
    pub fn bulk_delete_files(&mut self, folder_id: FolderId, file_ids: &HashSet<String>) -> Outcome {
        if file_ids.is_empty() {
            self.selected_files.clear();
            return Rejection::NoFilesSelected.into();
        }
        let Some(folder) = self.folder_mut(folder_id) else {
            return Rejection::UnknownFolder(folder_id).into();
        };
        let before = folder.files.len();
        folder.files.retain(|f| !file_ids.contains(&f.id));
        let count = before - folder.files.len();
        self.selected_files.clear();

        info!(folder_id = %folder_id, count, "Files deleted");

        FileEvent::BulkDeleted { folder_id, count }.into()
    }

    /// Deletes the selected files from the selected folder.
    pub fn delete_selected_files(&mut self) -> Outcome {
        let Some(folder_id) = self.selected_folder else {
            return Rejection::NoFolderSelected.into();
        };
        let ids = std::mem::take(&mut self.selected_files);
        self.bulk_delete_files(folder_id, &ids)
    }

    /// Checks or unchecks one file of the selected folder.
    ///
    /// Returns `false` if the file is not in the selected folder.
    pub fn toggle_file_selection(&mut self, file_id: &str, checked: bool) -> bool {
        let in_current = self
            .current_folder()
            .is_some_and(|folder| folder.contains_file(file_id));
        if !in_current {
            return false;
        }
        if checked {
            self.selected_files.insert(file_id.to_string());
        } else {
            self.selected_files.remove(file_id);
        }
        true
    }

    /// Selects every file currently visible under the search filter.
    pub fn select_all_visible(&mut self) -> usize {
        let ids: HashSet<String> = self
            .visible_files()
            .into_iter()
            .map(|f| f.id.clone())
            .collect();
        let count = ids.len();
        self.selected_files = ids;
        count
    }

    /// Clears the file selection.
    pub fn clear_file_selection(&mut self) {
        self.selected_files.clear();
    }

    /// Sets the file name filter.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Sets the listing order.
    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
    }

    /// Sets the listing layout.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Expands a collapsed folder or collapses an expanded one.
    ///
    /// Returns the new expanded state; unknown folders stay collapsed.
    pub fn toggle_expanded(&mut self, id: FolderId) -> bool {
        if !self.contains_folder(id) {
            return false;
        }
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Whether a folder is expanded in the tree view.
    pub fn is_expanded(&self, id: FolderId) -> bool {
        self.expanded.contains(&id)
    }

    pub(crate) fn prune_file_selection(&mut self) {
        let live: HashSet<&str> = self
            .current_folder()
            .map(|folder| folder.files.iter().map(|f| f.id.as_str()).collect())
            .unwrap_or_default();
        if live.is_empty() {
            self.selected_files.clear();
            return;
        }
        let keep: HashSet<String> = self
            .selected_files
            .iter()
            .filter(|id| live.contains(id.as_str()))
            .cloned()
            .collect();
        self.selected_files = keep;
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new(&ExplorerConfig::default())
    }
}
