use thiserror::Error;

/// Failure markers raised by block sync.
///
/// Each variant has a fixed message. Callers match on the variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncError {
    /// The syncpoint is too close to the tail for a sync to be worthwhile.
    /// Callers drop the sync task instead of treating this as a failure.
    #[error("the gap between syncpoint and current tail is smaller than a dynasty interval, ignore the sync task")]
    TooSmallGapToSync,

    #[error("cannot find the block at given height")]
    CannotFindBlockByHeight,

    #[error("cannot find the block with the given hash")]
    CannotFindBlockByHash,
}

impl SyncError {
    /// Whether the caller should treat this error as a no-op.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, SyncError::TooSmallGapToSync)
    }
}

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
