use containers::{BlockHeader, Bytes32};
use tracing::{debug, info};

use crate::{
    config::SyncConfig,
    error::{SyncError, SyncResult},
    gap::check_sync_gap,
    lookup::BlockLookup,
};

/// A sync that is worth running: from `syncpoint` towards `tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTask {
    pub syncpoint: BlockHeader,
    pub tail: BlockHeader,
    pub gap: u64,
}

/// Decides whether a sync should start from a given syncpoint.
#[derive(Debug, Clone)]
pub struct SyncPlanner {
    config: SyncConfig,
}

impl SyncPlanner {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Plan a sync from the block with `syncpoint_hash`.
    ///
    /// Returns `Ok(None)` when the sync should be skipped. Lookup failures are
    /// propagated as `CannotFindBlockByHash` (unknown syncpoint) or
    /// `CannotFindBlockByHeight` (no tail).
    pub fn plan<L: BlockLookup>(
        &self,
        lookup: &L,
        syncpoint_hash: &Bytes32,
    ) -> SyncResult<Option<SyncTask>> {
        let syncpoint = lookup.block_by_hash(syncpoint_hash)?;
        let tail = lookup.tail().ok_or(SyncError::CannotFindBlockByHeight)?;

        match check_sync_gap(syncpoint.height, tail.height, self.config.dynasty_interval) {
            Ok(gap) => {
                info!(
                    syncpoint = syncpoint.height.0,
                    tail = tail.height.0,
                    gap,
                    "Starting sync task"
                );
                Ok(Some(SyncTask { syncpoint, tail, gap }))
            }
            Err(err) if err.is_ignorable() => {
                debug!(syncpoint = %syncpoint.hash, reason = %err, "Skipping sync task");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
