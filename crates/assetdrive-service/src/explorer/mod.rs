//! Explorer state: the folder collection plus selection and view state.
//!
//! All operations live on [`ExplorerState`] and are split by concern:
//! folder and file mutations, derived listings, navigation, fetch
//! sequencing, upload insertion, and transform requests.

pub mod fetch;
pub mod listing;
pub mod navigation;
pub mod outcome;
pub mod state;
pub mod transform;
pub mod upload;

pub use fetch::{FetchOutcome, FetchTicket, LoadStatus};
pub use listing::ListingSummary;
pub use navigation::DeletePreview;
pub use outcome::{Outcome, Rejection};
pub use state::ExplorerState;
