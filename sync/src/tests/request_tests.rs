use pretty_assertions::assert_eq;

use super::common::hash;
use crate::{MAX_CHUNK_PER_SYNC_REQUEST, SyncConfig, SyncRequest};

fn chunks(n: u8) -> Vec<containers::Bytes32> {
    (1..=n).map(hash).collect()
}

#[test]
fn test_request_within_limit_is_kept() {
    let request = SyncRequest::build(hash(0), chunks(3), &SyncConfig::default());
    assert_eq!(request.chunks, chunks(3));
    assert_eq!(request.syncpoint, hash(0));
}

#[test]
fn test_request_is_capped_at_max() {
    let request = SyncRequest::build(hash(0), chunks(25), &SyncConfig::default());

    assert_eq!(request.len(), MAX_CHUNK_PER_SYNC_REQUEST);
    assert_eq!(request.chunks, chunks(10));
}

#[test]
fn test_request_respects_configured_limit() {
    let config = SyncConfig {
        max_chunks_per_request: 4,
        ..SyncConfig::default()
    };
    let request = SyncRequest::build(hash(0), chunks(9), &config);

    assert_eq!(request.chunks, chunks(4));
}

#[test]
fn test_unvalidated_limit_never_exceeds_max() {
    let config = SyncConfig {
        max_chunks_per_request: 50,
        ..SyncConfig::default()
    };
    let request = SyncRequest::build(hash(0), chunks(30), &config);

    assert_eq!(request.len(), MAX_CHUNK_PER_SYNC_REQUEST);
}

#[test]
fn test_empty_request() {
    let request = SyncRequest::build(hash(0), Vec::new(), &SyncConfig::default());
    assert!(request.is_empty());
}
