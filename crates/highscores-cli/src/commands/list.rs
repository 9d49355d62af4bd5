//! List and top commands.

use anyhow::Result;
use highscores_core::{ScoreEntry, StoreConfig, format_json, format_tsv};

use crate::cli::OutputFormat;
use crate::cli_utils;
use crate::display::format_board_console;

/// Print the whole board (`count == None`) or its first `count` entries.
pub fn run(config: &StoreConfig, count: Option<usize>, format: OutputFormat) -> Result<()> {
    let store = cli_utils::open_store(config)?;

    let entries: Vec<&ScoreEntry> = match count {
        Some(count) => store.get_top(count).collect(),
        None => store.get_all().collect(),
    };

    let content = match format {
        OutputFormat::Table => format_board_console(&entries),
        OutputFormat::Tsv => format_tsv(entries.iter().copied()),
        OutputFormat::Json => format_json(entries.iter().copied())?,
    };
    println!("{}", content);

    Ok(())
}
