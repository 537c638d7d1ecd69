//! Asset list fetch sequencing.
//!
//! Every fetch takes a ticket. Only the result carrying the newest ticket is
//! applied, so a slow response to an older search can never overwrite the
//! outcome of a newer one.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use assetdrive_core::result::AppResult;
use assetdrive_core::traits::{AssetRecord, AssetSource};

use super::state::ExplorerState;

/// Identifies one fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    /// The request generation this ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Load status of the asset list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum LoadStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The folder collection reflects the latest fetch.
    Ready,
    /// The latest fetch failed; the previous collection was kept.
    Failed(String),
}

impl LoadStatus {
    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Result of applying a fetch response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The folder collection was rebuilt.
    Applied {
        /// Folders built.
        folders: usize,
        /// Files placed.
        files: usize,
    },
    /// The fetch failed and the collection was left as it was.
    Failed {
        /// Error description.
        message: String,
    },
    /// A newer fetch had started; the response was discarded.
    Stale,
}

impl ExplorerState {
    /// Starts a fetch and returns its ticket, superseding any fetch still
    /// in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        self.status = LoadStatus::Loading;
        debug!(generation = self.fetch_generation, "Fetch started");
        FetchTicket {
            generation: self.fetch_generation,
        }
    }

    /// Whether `ticket` belongs to the most recent fetch.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.fetch_generation
    }

    /// Applies a fetch response if its ticket is still current.
    ///
    /// On success the folder collection is rebuilt from the records. On
    /// failure the error is recorded in the load status and the existing
    /// collection is kept.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: AppResult<Vec<AssetRecord>>,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            debug!(
                generation = ticket.generation,
                current = self.fetch_generation,
                "Discarding stale fetch response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(records) => {
                let built = self.builder.build_collection(&records);
                let folder_count = built.folders.len();
                self.replace_folders(built.folders);
                self.implicit_root = built.implicit_root;
                self.status = LoadStatus::Ready;

                info!(
                    folders = folder_count,
                    files = records.len(),
                    "Asset list loaded"
                );

                FetchOutcome::Applied {
                    folders: folder_count,
                    files: records.len(),
                }
            }
            Err(e) => {
                warn!(error = %e, "Asset list fetch failed");
                let message = e.to_string();
                self.status = LoadStatus::Failed(message.clone());
                FetchOutcome::Failed { message }
            }
        }
    }

    /// Fetches the asset list from `source` and applies it.
    ///
    /// A non-empty search query is forwarded to the source.
    ///
    /// The exclusive borrow is held across the await, so two refreshes on
    /// one state never overlap. Callers that keep several requests in flight
    /// should pair [`begin_fetch`](Self::begin_fetch) with
    /// [`apply_fetch`](Self::apply_fetch) instead; only that pair relies on
    /// the ticket check.
    pub async fn refresh(&mut self, source: &dyn AssetSource) -> FetchOutcome {
        let search = Some(self.search_query.trim().to_string()).filter(|q| !q.is_empty());
        let ticket = self.begin_fetch();
        let result = source.list_assets(search.as_deref()).await;
        self.apply_fetch(ticket, result)
    }
}
