use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use containers::{BlockHeader, Height};
use sync::{BlockLookup, ChainIndex, SyncConfig, SyncPlanner};
use tracing::info;

/// Decide whether a sync from a syncpoint to the current tail is worth running.
#[derive(Parser, Debug)]
struct Args {
    /// YAML sync config; devnet defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    syncpoint_height: u64,

    #[arg(short, long)]
    tail_height: u64,
}

/// Linear chain from genesis up to and including `tail`.
fn local_chain(tail: Height) -> ChainIndex {
    let mut header = BlockHeader::genesis();
    let mut index = ChainIndex::new();
    index.insert(header);
    while header.height < tail {
        header = header.child();
        index.insert(header);
    }
    index
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SyncConfig::load(path)?,
        None => SyncConfig::default(),
    };
    let planner = SyncPlanner::new(config);

    info!(
        dynasty_interval = planner.config().dynasty_interval,
        chunk_limit = planner.config().chunk_limit(),
        "Loaded sync config"
    );

    let chain = local_chain(Height(args.tail_height));
    let syncpoint = chain.block_by_height(Height(args.syncpoint_height))?;

    match planner.plan(&chain, &syncpoint.hash)? {
        Some(task) => {
            info!(
                syncpoint = %task.syncpoint.hash,
                tail = %task.tail.hash,
                gap = task.gap,
                "Sync would start"
            );
            println!("sync: gap of {} blocks", task.gap);
        }
        None => println!("skip: syncpoint {} is within a dynasty interval of the tail", syncpoint.height),
    }

    Ok(())
}
