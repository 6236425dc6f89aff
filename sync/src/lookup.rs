//! Header lookup by height or hash.
//!
//! `ChainIndex` keeps one header per height, the way a canonical chain does.
//! Inserting a header at an occupied height replaces the previous one.
use std::collections::{BTreeMap, HashMap};

use containers::{BlockHeader, Bytes32, Height};
use tracing::debug;

use crate::error::{SyncError, SyncResult};

/// Source of block headers consulted while planning a sync.
pub trait BlockLookup {
    fn header_at_height(&self, height: Height) -> Option<BlockHeader>;

    fn header_by_hash(&self, hash: &Bytes32) -> Option<BlockHeader>;

    /// Highest known header.
    fn tail(&self) -> Option<BlockHeader>;

    fn block_by_height(&self, height: Height) -> SyncResult<BlockHeader> {
        self.header_at_height(height)
            .ok_or(SyncError::CannotFindBlockByHeight)
    }

    fn block_by_hash(&self, hash: &Bytes32) -> SyncResult<BlockHeader> {
        self.header_by_hash(hash)
            .ok_or(SyncError::CannotFindBlockByHash)
    }
}

#[derive(Debug, Default, Clone)]
pub struct ChainIndex {
    /// Headers indexed by hash
    headers: HashMap<Bytes32, BlockHeader>,

    /// Canonical hash at each height
    by_height: BTreeMap<Height, Bytes32>,
}

impl ChainIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a sequence of headers.
    pub fn from_headers(headers: impl IntoIterator<Item = BlockHeader>) -> Self {
        let mut index = Self::new();
        for header in headers {
            index.insert(header);
        }
        index
    }

    /// Insert a header, returning the header it displaced at the same height.
    pub fn insert(&mut self, header: BlockHeader) -> Option<BlockHeader> {
        // A hash lives at one height only; drop its slot if it moved.
        if let Some(previous) = self.headers.get(&header.hash).copied() {
            if previous.height != header.height
                && self.by_height.get(&previous.height) == Some(&header.hash)
            {
                self.by_height.remove(&previous.height);
            }
        }

        let replaced = self
            .by_height
            .insert(header.height, header.hash)
            .filter(|old| *old != header.hash)
            .and_then(|old| self.headers.remove(&old));

        if let Some(old) = &replaced {
            debug!(
                height = header.height.0,
                old = %old.hash,
                new = %header.hash,
                "Replaced header at height"
            );
        }

        self.headers.insert(header.hash, header);
        replaced
    }

    pub fn remove(&mut self, hash: &Bytes32) -> Option<BlockHeader> {
        let header = self.headers.remove(hash)?;
        if self.by_height.get(&header.height) == Some(hash) {
            self.by_height.remove(&header.height);
        }
        Some(header)
    }

    pub fn contains(&self, hash: &Bytes32) -> bool {
        self.headers.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn clear(&mut self) {
        self.headers.clear();
        self.by_height.clear();
    }
}

impl BlockLookup for ChainIndex {
    fn header_at_height(&self, height: Height) -> Option<BlockHeader> {
        self.by_height
            .get(&height)
            .and_then(|hash| self.headers.get(hash))
            .filter(|header| header.height == height)
            .copied()
    }

    fn header_by_hash(&self, hash: &Bytes32) -> Option<BlockHeader> {
        self.headers.get(hash).copied()
    }

    fn tail(&self) -> Option<BlockHeader> {
        self.by_height
            .values()
            .next_back()
            .and_then(|hash| self.headers.get(hash))
            .copied()
    }
}
