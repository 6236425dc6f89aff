use containers::{BlockHeader, Bytes32};

use crate::ChainIndex;

/// Headers of a linear chain from genesis up to and including `tail_height`.
pub fn build_chain(tail_height: u64) -> Vec<BlockHeader> {
    let mut headers = vec![BlockHeader::genesis()];
    for _ in 0..tail_height {
        let next = headers[headers.len() - 1].child();
        headers.push(next);
    }
    headers
}

pub fn build_index(tail_height: u64) -> ChainIndex {
    ChainIndex::from_headers(build_chain(tail_height))
}

pub fn hash(byte: u8) -> Bytes32 {
    Bytes32::from([byte; 32])
}
