//! # highscores-core
//!
//! Persisted top-10 leaderboard for game scores.
//!
//! This crate provides:
//! - `ScoreEntry` and the ranking order (score descending, earlier date first)
//! - `ScoreStore`, which loads a JSON leaderboard file, re-ranks on insert and
//!   writes every mutation back atomically
//! - A `FileSystem` abstraction with a real and an in-memory implementation
//! - TSV/JSON export of the board

pub mod config;
pub mod entry;
pub mod error;
pub mod export;
pub mod fs;
pub mod store;

pub use config::{
    DEFAULT_APP_DIR, DEFAULT_FILE_NAME, DEFAULT_TOP_COUNT, MAX_ENTRIES, ReadOrder, StoreConfig,
    StoreConfigBuilder, default_data_dir,
};
pub use entry::{ScoreEntry, parse_date};
pub use error::{Error, Result};
pub use export::{ExportFormat, export, format_json, format_tsv, format_tsv_header};
pub use fs::{FileSystem, MemoryFileSystem, StdFileSystem};
pub use store::{LoadOutcome, LoadStatus, SaveStatus, ScoreStore};
