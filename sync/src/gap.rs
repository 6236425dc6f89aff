use containers::Height;
use tracing::debug;

use crate::error::{SyncError, SyncResult};

/// Check that the syncpoint is far enough from the tail to be worth syncing.
///
/// Returns the gap in blocks, or `SyncError::TooSmallGapToSync` when it is
/// smaller than one dynasty interval.
pub fn check_sync_gap(syncpoint: Height, tail: Height, dynasty_interval: u64) -> SyncResult<u64> {
    let gap = syncpoint.distance(tail);
    if gap < dynasty_interval {
        debug!(
            syncpoint = syncpoint.0,
            tail = tail.0,
            gap,
            dynasty_interval,
            "Sync gap below dynasty interval"
        );
        return Err(SyncError::TooSmallGapToSync);
    }
    Ok(gap)
}
