//! Add command for recording a score.

use anyhow::{Context, Result};
use chrono::Local;
use highscores_core::{MAX_ENTRIES, ScoreEntry, StoreConfig, parse_date};

use crate::cli_utils;

pub fn run(
    config: &StoreConfig,
    name: Option<String>,
    score: Option<i32>,
    level: i32,
    date: Option<&str>,
    json: Option<&str>,
) -> Result<()> {
    let entry = match json {
        Some(doc) => parse_entry_json(doc)?,
        None => build_entry(name, score, level, date)?,
    };

    let mut store = cli_utils::open_store(config)?;
    let rank = entry.as_ref().and_then(|e| store.potential_rank(e));
    let player = entry.as_ref().map(|e| e.player_name.clone());

    let status = store.try_add(entry)?;
    cli_utils::ensure_saved(status)?;

    let player = player.unwrap_or_default();
    match rank {
        Some(rank) => eprintln!("Added {} at rank {}", player, rank),
        None => eprintln!("{} did not make the top {}", player, MAX_ENTRIES),
    }

    Ok(())
}

/// Parse a JSON entry; `null` yields `None` and is rejected by the store.
fn parse_entry_json(doc: &str) -> Result<Option<ScoreEntry>> {
    serde_json::from_str(doc).context("Invalid entry JSON")
}

fn build_entry(
    name: Option<String>,
    score: Option<i32>,
    level: i32,
    date: Option<&str>,
) -> Result<Option<ScoreEntry>> {
    let (Some(name), Some(score)) = (name, score) else {
        return Ok(None);
    };
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => Local::now(),
    };
    Ok(Some(ScoreEntry::new(name, score, date, level)))
}
