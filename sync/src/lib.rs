/// Block synchronization contract.
///
/// Defines the failure markers and request bound shared with a sync engine,
/// together with the pieces of that engine that surface them:
///
/// - **Errors**: `SyncError`, compared by variant, never by message text
/// - **Config**: `MAX_CHUNK_PER_SYNC_REQUEST` and the loadable `SyncConfig`
/// - **Lookup**: `BlockLookup` resolves headers by height or hash
/// - **Gap check**: decides whether the distance to the tail warrants a sync
/// - **Planner**: turns a syncpoint into a `SyncTask`, swallowing ignorable errors
/// - **Request**: caps the number of chunks carried by one `SyncRequest`
pub mod config;
pub mod error;
pub mod gap;
pub mod lookup;
pub mod planner;
pub mod request;

pub use config::*;
pub use error::{SyncError, SyncResult};
pub use gap::check_sync_gap;
pub use lookup::{BlockLookup, ChainIndex};
pub use planner::{SyncPlanner, SyncTask};
pub use request::SyncRequest;

#[cfg(test)]
mod tests;
