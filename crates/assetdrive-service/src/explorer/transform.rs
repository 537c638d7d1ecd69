//! Transform requests for the asset host's renderer.

use tracing::debug;

use assetdrive_core::types::FolderId;
use assetdrive_entity::transform::{TransformFlags, TransformRequest};

use super::state::ExplorerState;

impl ExplorerState {
    /// Builds a transform request for one file.
    ///
    /// Returns `None` when the folder or file does not exist. The request
    /// carries only the file id and the flags; the renderer does the rest.
    pub fn transform_request(
        &self,
        folder_id: FolderId,
        file_id: &str,
        flags: TransformFlags,
    ) -> Option<TransformRequest> {
        let file = self.folder(folder_id)?.file(file_id)?;
        debug!(file_id = %file.id, identity = flags.is_identity(), "Transform requested");
        Some(TransformRequest {
            file_id: file.id.clone(),
            flags,
        })
    }
}
