//! Placing freshly uploaded assets into the folder collection.

use tracing::info;

use assetdrive_core::events::FileEvent;
use assetdrive_core::traits::AssetRecord;
use assetdrive_core::types::FolderId;
use assetdrive_entity::file::FileEntry;
use assetdrive_entity::folder::Folder;

use super::outcome::{Outcome, Rejection};
use super::state::ExplorerState;
use crate::folder::normalize_path;

impl ExplorerState {
    /// Inserts an uploaded asset without refetching the whole list.
    ///
    /// The target folder is found by walking the normalized path from the
    /// roots by name; missing folders along the way are created. An empty
    /// path targets the implicit root folder. A file already present under
    /// the same id is replaced, wherever it was.
    pub fn insert_uploaded(&mut self, record: AssetRecord) -> Outcome {
        if record.public_id.trim().is_empty() {
            return Rejection::MissingFileId.into();
        }

        let (folder_id, created_folders) = self.ensure_folder_path(&record.asset_folder);

        for folder in &mut self.folders {
            folder.files.retain(|f| f.id != record.public_id);
        }

        let entry = FileEntry::from(&record);
        let Some(folder) = self.folder_mut(folder_id) else {
            return Rejection::UnknownFolder(folder_id).into();
        };
        folder.files.push(entry);
        self.prune_file_selection();

        info!(
            file_id = %record.public_id,
            folder_id = %folder_id,
            created = created_folders.len(),
            "Uploaded file inserted"
        );

        FileEvent::Inserted {
            file_id: record.public_id,
            folder_id,
            created_folders,
        }
        .into()
    }

    /// Resolves `path` to a folder id, creating missing folders.
    ///
    /// Returns the target id and the ids created, outermost first.
    fn ensure_folder_path(&mut self, path: &str) -> (FolderId, Vec<FolderId>) {
        let segments: Vec<String> = normalize_path(path)
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut created = Vec::new();

        let Some((first, rest)) = segments.split_first() else {
            if let Some(id) = self.implicit_root.filter(|id| self.contains_folder(*id)) {
                return (id, created);
            }
            let root = Folder::new(self.builder.root_folder_name(), None);
            let id = root.id;
            self.folders.push(root);
            self.implicit_root = Some(id);
            created.push(id);
            return (id, created);
        };

        let mut current = self.child_or_create(None, first, &mut created);
        for segment in rest {
            current = self.child_or_create(Some(current), segment, &mut created);
        }
        (current, created)
    }

    /// Id of the first child of `parent` named `name`, creating it if absent.
    ///
    /// The implicit root never matches a named segment.
    fn child_or_create(
        &mut self,
        parent: Option<FolderId>,
        name: &str,
        created: &mut Vec<FolderId>,
    ) -> FolderId {
        let existing = self.named_child(parent, name).map(|f| f.id);
        if let Some(id) = existing {
            return id;
        }
        let folder = Folder::new(name, parent);
        let id = folder.id;
        self.folders.push(folder);
        created.push(id);
        id
    }
}
