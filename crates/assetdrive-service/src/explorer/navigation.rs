//! Breadcrumbs, child listings, subtree walks, and path lookup.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use assetdrive_core::types::FolderId;
use assetdrive_entity::folder::Folder;

use super::state::ExplorerState;
use crate::collation::compare_names;
use crate::folder::normalize_path;

/// What deleting a folder would remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePreview {
    /// Descendant folders, not counting the target.
    pub subfolders: usize,
    /// Files in the target and all descendants.
    pub files: usize,
}

impl ExplorerState {
    /// Root-to-current chain for the selected folder.
    pub fn breadcrumbs(&self) -> Vec<&Folder> {
        match self.selected_folder {
            Some(id) => self.breadcrumbs_for(id),
            None => Vec::new(),
        }
    }

    /// Root-to-`id` chain, walking parent links upward.
    ///
    /// The walk stops at a missing parent, at a folder already visited, or
    /// after `breadcrumb_max_depth` folders, so corrupted or cyclic parent
    /// chains still terminate.
    pub fn breadcrumbs_for(&self, id: FolderId) -> Vec<&Folder> {
        let mut path = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.folder(id);

        while let Some(folder) = current {
            if path.len() >= self.breadcrumb_max_depth || !seen.insert(folder.id) {
                break;
            }
            path.push(folder);
            current = folder.parent_id.and_then(|parent| self.folder(parent));
        }

        path.reverse();
        path
    }

    /// Direct children of `parent` (roots for `None`), name-sorted.
    pub fn children_of(&self, parent: Option<FolderId>) -> Vec<&Folder> {
        let mut children: Vec<&Folder> = self
            .folders
            .iter()
            .filter(|f| f.parent_id == parent && Some(f.id) != parent)
            .collect();
        children.sort_by(|a, b| compare_names(&a.name, &b.name));
        children
    }

    /// Root folders, name-sorted.
    pub fn roots(&self) -> Vec<&Folder> {
        self.children_of(None)
    }

    /// `id` followed by every transitive descendant, breadth-first.
    ///
    /// Each folder appears once even if the parent links form a cycle.
    pub fn subtree_ids(&self, id: FolderId) -> Vec<FolderId> {
        let mut found = vec![id];
        let mut seen: HashSet<FolderId> = HashSet::from([id]);
        let mut queue = VecDeque::from([id]);

        while let Some(parent) = queue.pop_front() {
            for folder in &self.folders {
                if folder.parent_id == Some(parent) && seen.insert(folder.id) {
                    found.push(folder.id);
                    queue.push_back(folder.id);
                }
            }
        }

        found
    }

    /// Counts what [`delete_folder`](Self::delete_folder) would remove.
    pub fn delete_preview(&self, id: FolderId) -> Option<DeletePreview> {
        self.folder(id)?;
        let subtree: HashSet<FolderId> = self.subtree_ids(id).into_iter().collect();
        let files = self
            .folders
            .iter()
            .filter(|f| subtree.contains(&f.id))
            .map(|f| f.files.len())
            .sum();
        Some(DeletePreview {
            subfolders: subtree.len() - 1,
            files,
        })
    }

    /// Resolves a slash-delimited path by walking folder names from the
    /// roots.
    ///
    /// An empty path resolves to the implicit root folder, and only an empty
    /// path does. When siblings share a name the first in name order wins.
    pub fn find_by_path(&self, path: &str) -> Option<&Folder> {
        let segments = normalize_path(path);
        if segments.is_empty() {
            return self.implicit_root.and_then(|id| self.folder(id));
        }

        let mut parent: Option<FolderId> = None;
        let mut found = None;
        for segment in segments {
            let folder = self.named_child(parent, segment)?;
            parent = Some(folder.id);
            found = Some(folder);
        }
        found
    }

    /// First child of `parent` named `name`, skipping the implicit root.
    pub(crate) fn named_child(&self, parent: Option<FolderId>, name: &str) -> Option<&Folder> {
        self.children_of(parent)
            .into_iter()
            .find(|f| f.name == name && Some(f.id) != self.implicit_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdrive_core::config::explorer::ExplorerConfig;

    fn chain() -> (ExplorerState, Vec<FolderId>) {
        let a = Folder::new("a", None);
        let b = Folder::new("b", Some(a.id));
        let c = Folder::new("c", Some(b.id));
        let ids = vec![a.id, b.id, c.id];
        (
            ExplorerState::with_folders(&ExplorerConfig::default(), vec![c, a, b]),
            ids,
        )
    }

    #[test]
    fn test_breadcrumbs_root_to_current() {
        let (mut state, ids) = chain();
        state.select_folder(Some(ids[2]));
        let names: Vec<&str> = state.breadcrumbs().into_iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_breadcrumbs_terminate_on_cycle() {
        let mut a = Folder::new("a", None);
        let b = Folder::new("b", Some(a.id));
        a.parent_id = Some(b.id);
        let b_id = b.id;
        let mut state = ExplorerState::with_folders(&ExplorerConfig::default(), vec![a, b]);
        state.select_folder(Some(b_id));
        let crumbs = state.breadcrumbs();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs.last().unwrap().id, b_id);
    }

    #[test]
    fn test_breadcrumbs_capped_at_max_depth() {
        let mut folders = vec![Folder::new("0", None)];
        for i in 1..50 {
            let parent = folders[i - 1].id;
            folders.push(Folder::new(i.to_string(), Some(parent)));
        }
        let deepest = folders[49].id;
        let state = ExplorerState::with_folders(&ExplorerConfig::default(), folders);
        let crumbs = state.breadcrumbs_for(deepest);
        assert_eq!(crumbs.len(), 20);
        assert_eq!(crumbs.last().unwrap().id, deepest);
    }

    #[test]
    fn test_breadcrumbs_stop_at_missing_parent() {
        let orphan = Folder::new("orphan", Some(FolderId::new()));
        let id = orphan.id;
        let state = ExplorerState::with_folders(&ExplorerConfig::default(), vec![orphan]);
        assert_eq!(state.breadcrumbs_for(id).len(), 1);
    }

    #[test]
    fn test_subtree_and_preview() {
        let (state, ids) = chain();
        assert_eq!(state.subtree_ids(ids[0]), ids);
        assert_eq!(
            state.delete_preview(ids[0]),
            Some(DeletePreview {
                subfolders: 2,
                files: 0
            })
        );
        assert!(state.delete_preview(FolderId::new()).is_none());
    }

    #[test]
    fn test_find_by_path() {
        let (state, ids) = chain();
        assert_eq!(state.find_by_path("a/b/c").map(|f| f.id), Some(ids[2]));
        assert_eq!(state.find_by_path("/a//b/").map(|f| f.id), Some(ids[1]));
        assert!(state.find_by_path("a/c").is_none());
        assert!(state.find_by_path("").is_none());
    }

    #[test]
    fn test_children_sorted() {
        let (mut state, ids) = chain();
        state.create_folder("Zed", Some(ids[0]));
        state.create_folder("alpha", Some(ids[0]));
        let names: Vec<&str> = state
            .children_of(Some(ids[0]))
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["alpha", "b", "Zed"]);
    }
}
