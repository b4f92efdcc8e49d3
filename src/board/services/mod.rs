//! Application services for board synchronization.

mod reconcile;
mod sync;

pub use reconcile::{get_assignee_update, get_state_update};
pub use sync::{
    BoardSyncError, BoardSyncResult, BoardSyncService, CallOutcome, IssueLookup, MoveReport,
    TrackerOperation,
};
