//! Export command for writing the board to TSV or JSON.

use std::path::Path;

use anyhow::{Context, Result};
use highscores_core::{ExportFormat, StoreConfig, export};

use crate::cli_utils;

pub fn run(config: &StoreConfig, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let store = cli_utils::open_store(config)?;
    let content = export(store.get_all(), format)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!(
            "Exported {} entries ({}) to: {}",
            store.len(),
            format,
            output_path.display()
        );
    } else {
        println!("{}", content);
    }

    Ok(())
}
