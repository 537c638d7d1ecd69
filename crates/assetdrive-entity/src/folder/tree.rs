//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use assetdrive_core::types::FolderId;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Depth level (0 for roots).
    pub depth: usize,
    /// Number of files directly in this folder.
    pub file_count: usize,
    /// Child folder nodes, name-sorted.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Number of files in this node and all of its descendants.
    pub fn total_file_count(&self) -> usize {
        self.file_count
            + self
                .children
                .iter()
                .map(FolderNode::total_file_count)
                .sum::<usize>()
    }
}

/// A complete folder forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: usize,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_folders: 0,
        }
    }

    /// Visit every node depth-first, parents before children.
    pub fn walk<F: FnMut(&FolderNode)>(&self, mut visit: F) {
        fn go<F: FnMut(&FolderNode)>(node: &FolderNode, visit: &mut F) {
            visit(node);
            for child in &node.children {
                go(child, visit);
            }
        }
        for root in &self.roots {
            go(root, &mut visit);
        }
    }
}
