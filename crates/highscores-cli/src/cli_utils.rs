//! Common CLI utility functions shared across commands.

use anyhow::{Context, Result};
use highscores_core::{SaveStatus, ScoreStore, StdFileSystem, StoreConfig};
use tracing::warn;

use crate::cli::Args;

/// Build the store configuration from global flags.
pub fn store_config(args: &Args) -> StoreConfig {
    let mut builder = StoreConfig::builder().read_order(args.read_order);
    if let Some(file) = &args.file {
        builder = builder.path(file);
    }
    builder.build()
}

pub fn open_store(config: &StoreConfig) -> Result<ScoreStore> {
    let store = ScoreStore::open(StdFileSystem, config).context("Failed to open leaderboard")?;
    if store.load_status().is_degraded() {
        warn!(
            "Leaderboard at {} is unreadable; starting from an empty board",
            store.path().display()
        );
    }
    Ok(store)
}

/// Turn a failed save into a command error; the process is about to exit and
/// the in-memory change would be lost.
pub fn ensure_saved(status: SaveStatus) -> Result<()> {
    match status {
        SaveStatus::Saved => Ok(()),
        SaveStatus::Failed { reason } => anyhow::bail!("Leaderboard was not saved: {}", reason),
    }
}
