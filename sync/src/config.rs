//! Sync configuration: the request bound and the loadable per-network settings.
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

/// Maximum number of chunks a single sync request may carry.
pub const MAX_CHUNK_PER_SYNC_REQUEST: usize = 10;

/// Devnet dynasty interval, in blocks.
pub const DEVNET_DYNASTY_INTERVAL: u64 = 240;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Minimum height gap, in blocks, that justifies starting a sync.
    pub dynasty_interval: u64,

    #[serde(default = "default_max_chunks")]
    pub max_chunks_per_request: usize,
}

fn default_max_chunks() -> usize {
    MAX_CHUNK_PER_SYNC_REQUEST
}

pub const DEVNET_CONFIG: SyncConfig = SyncConfig {
    dynasty_interval: DEVNET_DYNASTY_INTERVAL,
    max_chunks_per_request: MAX_CHUNK_PER_SYNC_REQUEST,
};

impl Default for SyncConfig {
    fn default() -> Self {
        DEVNET_CONFIG
    }
}

impl SyncConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SyncConfig =
            serde_yaml::from_str(yaml).context("failed to parse sync config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read sync config from {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.dynasty_interval > 0, "dynasty_interval must be positive");
        ensure!(
            (1..=MAX_CHUNK_PER_SYNC_REQUEST).contains(&self.max_chunks_per_request),
            "max_chunks_per_request must be between 1 and {MAX_CHUNK_PER_SYNC_REQUEST}, got {}",
            self.max_chunks_per_request
        );
        Ok(())
    }

    /// Chunk limit actually applied to requests.
    pub fn chunk_limit(&self) -> usize {
        self.max_chunks_per_request.min(MAX_CHUNK_PER_SYNC_REQUEST)
    }
}
