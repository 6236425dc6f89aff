use containers::Bytes32;
use tracing::warn;

use crate::config::SyncConfig;

/// Chunks requested from a peer in one sync round.
///
/// Never carries more than `SyncConfig::chunk_limit()` chunks, which is itself
/// bounded by `MAX_CHUNK_PER_SYNC_REQUEST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    pub syncpoint: Bytes32,
    pub chunks: Vec<Bytes32>,
}

impl SyncRequest {
    /// Build a request, keeping the first chunks up to the configured limit.
    pub fn build(syncpoint: Bytes32, mut chunks: Vec<Bytes32>, config: &SyncConfig) -> Self {
        let limit = config.chunk_limit();
        if chunks.len() > limit {
            warn!(
                requested = chunks.len(),
                limit,
                "Truncating sync request chunks"
            );
            chunks.truncate(limit);
        }
        Self { syncpoint, chunks }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
