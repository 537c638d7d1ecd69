//! Folder tree building from flat asset lists.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use assetdrive_core::config::explorer::ExplorerConfig;
use assetdrive_core::traits::AssetRecord;
use assetdrive_core::types::FolderId;
use assetdrive_entity::file::FileEntry;
use assetdrive_entity::folder::{Folder, FolderNode, FolderTree};

use super::path::normalize_path;
use crate::collation::compare_names;

/// Synthesizes folders from asset paths.
///
/// Folders are keyed by their full normalized path while building, so two
/// folders with the same name under different parents stay distinct. The
/// path key is dropped from the output: callers only see ids and parent
/// links.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    /// Display name of the implicit folder for assets with an empty path.
    root_folder_name: String,
}

/// A built folder collection together with its implicit root folder.
#[derive(Debug, Clone)]
pub struct BuiltFolders {
    /// Name-sorted folders.
    pub folders: Vec<Folder>,
    /// Folder holding assets with an empty path, if any had one.
    pub implicit_root: Option<FolderId>,
}

impl TreeBuilder {
    /// Creates a tree builder.
    pub fn new(root_folder_name: impl Into<String>) -> Self {
        Self {
            root_folder_name: root_folder_name.into(),
        }
    }

    /// Creates a tree builder from explorer configuration.
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.root_folder_name.clone())
    }

    /// Name given to the implicit folder holding root-level assets.
    pub fn root_folder_name(&self) -> &str {
        &self.root_folder_name
    }

    /// Builds a name-sorted folder forest from a flat asset list.
    ///
    /// Every asset lands in exactly one folder: the one matching its full
    /// normalized path. Assets with an empty path go to an implicit root
    /// folder that is only created when needed.
    pub fn build(&self, assets: &[AssetRecord]) -> Vec<Folder> {
        self.build_collection(assets).folders
    }

    /// Like [`build`](Self::build), but also reports which folder is the
    /// implicit root, since its name alone cannot tell it apart from a real
    /// folder of the same name.
    pub fn build_collection(&self, assets: &[AssetRecord]) -> BuiltFolders {
        let mut folders: Vec<Folder> = Vec::new();
        let mut by_path: HashMap<String, usize> = HashMap::new();

        for asset in assets {
            let segments = normalize_path(&asset.asset_folder);
            let index = self.ensure_path(&mut folders, &mut by_path, &segments);
            folders[index].files.push(FileEntry::from(asset));
        }

        let implicit_root = by_path.get("").map(|&index| folders[index].id);
        folders.sort_by(|a, b| compare_names(&a.name, &b.name));

        debug!(
            assets = assets.len(),
            folders = folders.len(),
            "Built folder collection"
        );

        BuiltFolders {
            folders,
            implicit_root,
        }
    }

    /// Returns the index of the folder for `segments`, creating it and any
    /// missing ancestors.
    fn ensure_path(
        &self,
        folders: &mut Vec<Folder>,
        by_path: &mut HashMap<String, usize>,
        segments: &[&str],
    ) -> usize {
        if segments.is_empty() {
            return *by_path.entry(String::new()).or_insert_with(|| {
                folders.push(Folder::new(self.root_folder_name.clone(), None));
                folders.len() - 1
            });
        }

        let mut parent: Option<FolderId> = None;
        let mut key = String::new();
        let mut index = 0;

        for segment in segments {
            if !key.is_empty() {
                key.push('/');
            }
            key.push_str(segment);

            index = match by_path.get(&key) {
                Some(&existing) => existing,
                None => {
                    folders.push(Folder::new(*segment, parent));
                    let created = folders.len() - 1;
                    by_path.insert(key.clone(), created);
                    created
                }
            };
            parent = Some(folders[index].id);
        }

        index
    }

    /// Builds a nested view of a flat folder collection.
    ///
    /// Folders whose parent is missing are promoted to roots, folders caught
    /// in a parent cycle are emitted as roots, and no folder appears twice.
    pub fn tree(&self, folders: &[Folder]) -> FolderTree {
        if folders.is_empty() {
            return FolderTree::empty();
        }

        let ids: HashSet<FolderId> = folders.iter().map(|f| f.id).collect();
        let mut children: HashMap<Option<FolderId>, Vec<&Folder>> = HashMap::new();
        for folder in folders {
            let parent = folder.parent_id.filter(|p| ids.contains(p) && *p != folder.id);
            children.entry(parent).or_default().push(folder);
        }
        for list in children.values_mut() {
            list.sort_by(|a, b| compare_names(&a.name, &b.name));
        }

        let mut visited = HashSet::new();
        let mut roots: Vec<FolderNode> = children
            .get(&None)
            .map(|list| {
                list.iter()
                    .filter_map(|root| Self::build_node(root, 0, &children, &mut visited))
                    .collect()
            })
            .unwrap_or_default();

        // Folders only reachable through a parent cycle.
        let mut stranded: Vec<&Folder> = folders
            .iter()
            .filter(|f| !visited.contains(&f.id))
            .collect();
        stranded.sort_by(|a, b| compare_names(&a.name, &b.name));
        for folder in stranded {
            if let Some(node) = Self::build_node(folder, 0, &children, &mut visited) {
                roots.push(node);
            }
        }

        FolderTree {
            total_folders: visited.len(),
            roots,
        }
    }

    fn build_node(
        folder: &Folder,
        depth: usize,
        children: &HashMap<Option<FolderId>, Vec<&Folder>>,
        visited: &mut HashSet<FolderId>,
    ) -> Option<FolderNode> {
        if !visited.insert(folder.id) {
            return None;
        }

        let child_nodes: Vec<FolderNode> = children
            .get(&Some(folder.id))
            .map(|list| {
                list.iter()
                    .filter_map(|child| Self::build_node(child, depth + 1, children, visited))
                    .collect()
            })
            .unwrap_or_default();

        Some(FolderNode {
            id: folder.id,
            name: folder.name.clone(),
            depth,
            file_count: folder.files.len(),
            children: child_nodes,
        })
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::from_config(&ExplorerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, folder: &str) -> AssetRecord {
        AssetRecord {
            public_id: id.to_string(),
            display_name: id.to_string(),
            asset_folder: folder.to_string(),
            resource_type: "image".to_string(),
            bytes: 100,
            uploaded_at: "2024-01-01T00:00:00Z".to_string(),
            created_at: String::new(),
            format: "png".to_string(),
            secure_url: String::new(),
            width: 10,
            height: 10,
        }
    }

    fn by_name<'a>(folders: &'a [Folder], name: &str) -> Vec<&'a Folder> {
        folders.iter().filter(|f| f.name == name).collect()
    }

    #[test]
    fn test_builds_every_prefix() {
        let folders = TreeBuilder::default().build(&[asset("f1", "a/b/c")]);
        assert_eq!(folders.len(), 3);

        let a = by_name(&folders, "a")[0];
        let b = by_name(&folders, "b")[0];
        let c = by_name(&folders, "c")[0];
        assert_eq!(a.parent_id, None);
        assert_eq!(b.parent_id, Some(a.id));
        assert_eq!(c.parent_id, Some(b.id));
        assert!(a.files.is_empty());
        assert_eq!(c.files[0].id, "f1");
    }

    #[test]
    fn test_shared_prefix_created_once() {
        let folders =
            TreeBuilder::default().build(&[asset("f1", "a/b"), asset("f2", "a/c"), asset("f3", "a")]);
        assert_eq!(by_name(&folders, "a").len(), 1);
        assert_eq!(folders.len(), 3);
        assert_eq!(by_name(&folders, "a")[0].files.len(), 1);
    }

    #[test]
    fn test_same_name_under_different_parents() {
        let folders = TreeBuilder::default().build(&[asset("f1", "x/a"), asset("f2", "y/a")]);
        let named_a = by_name(&folders, "a");
        assert_eq!(named_a.len(), 2);
        assert_ne!(named_a[0].id, named_a[1].id);
        assert_ne!(named_a[0].parent_id, named_a[1].parent_id);
    }

    #[test]
    fn test_empty_path_goes_to_root_folder() {
        let folders = TreeBuilder::new("Home").build(&[asset("f1", ""), asset("f2", "///")]);
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "Home");
        assert!(folders[0].is_root());
        assert_eq!(folders[0].files.len(), 2);
    }

    #[test]
    fn test_root_folder_does_not_merge_with_real_folder() {
        let folders = TreeBuilder::new("Home").build(&[asset("f1", ""), asset("f2", "Home")]);
        assert_eq!(by_name(&folders, "Home").len(), 2);
    }

    #[test]
    fn test_collection_reports_implicit_root() {
        let built = TreeBuilder::new("Home").build_collection(&[asset("f1", "Home"), asset("f2", "")]);
        let root = built.implicit_root.unwrap();
        let root_folder = built.folders.iter().find(|f| f.id == root).unwrap();
        assert!(root_folder.contains_file("f2"));
        assert!(!root_folder.contains_file("f1"));

        let without = TreeBuilder::default().build_collection(&[asset("f1", "a")]);
        assert!(without.implicit_root.is_none());
    }

    #[test]
    fn test_malformed_segments_collapse() {
        let folders = TreeBuilder::default().build(&[asset("f1", "a//b"), asset("f2", "/a/b/")]);
        assert_eq!(folders.len(), 2);
        assert_eq!(by_name(&folders, "b")[0].files.len(), 2);
    }

    #[test]
    fn test_output_sorted_by_name() {
        let folders = TreeBuilder::default().build(&[
            asset("f1", "zeta"),
            asset("f2", "Alpha"),
            asset("f3", "beta"),
        ]);
        let names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_tree_nests_children() {
        let builder = TreeBuilder::default();
        let folders = builder.build(&[asset("f1", "a/b"), asset("f2", "a/b"), asset("f3", "c")]);
        let tree = builder.tree(&folders);
        assert_eq!(tree.total_folders, 3);
        assert_eq!(tree.roots.len(), 2);
        assert_eq!(tree.roots[0].name, "a");
        assert_eq!(tree.roots[0].children[0].name, "b");
        assert_eq!(tree.roots[0].children[0].depth, 1);
        assert_eq!(tree.roots[0].total_file_count(), 2);
    }

    #[test]
    fn test_tree_keeps_cyclic_folders() {
        let builder = TreeBuilder::default();
        let mut a = Folder::new("a", None);
        let b = Folder::new("b", Some(a.id));
        a.parent_id = Some(b.id);
        let tree = builder.tree(&[a, b]);
        assert_eq!(tree.total_folders, 2);
        assert_eq!(tree.roots.len(), 1);
        assert_eq!(tree.roots[0].children.len(), 1);
    }

    #[test]
    fn test_tree_promotes_dangling_parent() {
        let builder = TreeBuilder::default();
        let orphan = Folder::new("orphan", Some(FolderId::new()));
        let tree = builder.tree(&[orphan]);
        assert_eq!(tree.roots.len(), 1);
        assert_eq!(tree.roots[0].name, "orphan");
    }
}
