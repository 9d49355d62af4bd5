use anyhow::Result;
use highscores_core::StoreConfig;

use crate::cli_utils;

pub fn run(config: &StoreConfig) -> Result<()> {
    let mut store = cli_utils::open_store(config)?;
    let removed = store.len();

    cli_utils::ensure_saved(store.clear())?;

    eprintln!("Removed {} entries from {}", removed, store.path().display());
    Ok(())
}
