use pretty_assertions::assert_eq;
use std::collections::HashSet;

use crate::{MAX_CHUNK_PER_SYNC_REQUEST, SyncError};

const ALL: [SyncError; 3] = [
    SyncError::TooSmallGapToSync,
    SyncError::CannotFindBlockByHeight,
    SyncError::CannotFindBlockByHash,
];

#[test]
fn test_errors_are_distinct() {
    for (i, a) in ALL.iter().enumerate() {
        for (j, b) in ALL.iter().enumerate() {
            assert_eq!(a == b, i == j, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn test_messages_are_stable() {
    assert_eq!(
        SyncError::TooSmallGapToSync.to_string(),
        "the gap between syncpoint and current tail is smaller than a dynasty interval, ignore the sync task"
    );
    assert_eq!(
        SyncError::CannotFindBlockByHeight.to_string(),
        "cannot find the block at given height"
    );
    assert_eq!(
        SyncError::CannotFindBlockByHash.to_string(),
        "cannot find the block with the given hash"
    );
}

#[test]
fn test_messages_are_non_empty_and_unique() {
    let messages: HashSet<String> = ALL.iter().map(ToString::to_string).collect();
    assert_eq!(messages.len(), ALL.len());
    assert!(messages.iter().all(|m| !m.is_empty()));
}

#[test]
fn test_only_gap_error_is_ignorable() {
    assert!(SyncError::TooSmallGapToSync.is_ignorable());
    assert!(!SyncError::CannotFindBlockByHeight.is_ignorable());
    assert!(!SyncError::CannotFindBlockByHash.is_ignorable());
}

#[test]
fn test_max_chunk_per_sync_request() {
    assert_eq!(MAX_CHUNK_PER_SYNC_REQUEST, 10);
    assert!(MAX_CHUNK_PER_SYNC_REQUEST > 0);
}

#[test]
fn test_error_converts_into_anyhow() {
    let err: anyhow::Error = SyncError::CannotFindBlockByHash.into();
    assert_eq!(
        err.downcast_ref::<SyncError>(),
        Some(&SyncError::CannotFindBlockByHash)
    );
}
