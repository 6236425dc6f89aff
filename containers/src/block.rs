use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Bytes32, Height};

/// Header fields the sync subsystem needs to locate a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHeader {
    pub height: Height,
    pub hash: Bytes32,
    pub parent_hash: Bytes32,
}

impl BlockHeader {
    /// Build a header whose hash commits to its height and parent.
    pub fn new(height: Height, parent_hash: Bytes32) -> Self {
        Self {
            height,
            hash: compute_hash(height, &parent_hash),
            parent_hash,
        }
    }

    pub fn genesis() -> Self {
        Self::new(Height::GENESIS, Bytes32::ZERO)
    }

    /// Header of the block built directly on top of this one.
    pub fn child(&self) -> Self {
        Self::new(self.height.next(), self.hash)
    }

    pub fn is_genesis(&self) -> bool {
        self.height == Height::GENESIS && self.parent_hash.is_zero()
    }
}

pub fn compute_hash(height: Height, parent_hash: &Bytes32) -> Bytes32 {
    let mut hasher = Sha256::new();
    hasher.update(height.0.to_le_bytes());
    hasher.update(parent_hash.as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    Bytes32::from(digest)
}
