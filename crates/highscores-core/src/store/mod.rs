//! Persisted top-N leaderboard.

mod status;

pub use status::{LoadOutcome, LoadStatus, SaveStatus};

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::{MAX_ENTRIES, ReadOrder, StoreConfig};
use crate::entry::ScoreEntry;
use crate::error::{Error, Result};
use crate::export::format_json;
use crate::fs::{FileSystem, StdFileSystem};

/// Leaderboard mirrored to a JSON file.
///
/// Every mutation re-ranks in memory and rewrites the file. Storage failures
/// never abort an operation: they are logged and reported through
/// `LoadStatus` / `SaveStatus`.
#[derive(Debug)]
pub struct ScoreStore<F: FileSystem = StdFileSystem> {
    fs: F,
    path: PathBuf,
    read_order: ReadOrder,
    entries: Vec<ScoreEntry>,
    load_status: LoadStatus,
}

impl ScoreStore<StdFileSystem> {
    /// Open `<data dir>/SolidSnake/highscores.json`.
    pub fn open_default() -> Result<Self> {
        Self::open(StdFileSystem, &StoreConfig::default())
    }
}

impl<F: FileSystem> ScoreStore<F> {
    /// Resolve the file path, create its directory and load the board.
    ///
    /// Fails only if the path cannot be resolved or the directory cannot be
    /// created. An unreadable file yields an empty board.
    pub fn open(fs: F, config: &StoreConfig) -> Result<Self> {
        let path = config.file_path()?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs.create_dir_all(dir)?;
        }

        let mut store = Self {
            fs,
            path,
            read_order: config.read_order,
            entries: Vec::new(),
            load_status: LoadStatus::Missing,
        };

        let outcome = store.load();
        store.entries = outcome.entries;
        store.load_status = outcome.status;

        Ok(store)
    }

    /// Read the board from storage without touching the in-memory state.
    pub fn load(&self) -> LoadOutcome {
        if !self.fs.exists(&self.path) {
            debug!("No high score file at {}", self.path.display());
            return LoadOutcome::empty(LoadStatus::Missing);
        }

        match self.read_entries() {
            Ok(entries) => {
                info!(
                    "Loaded {} high scores from {}",
                    entries.len(),
                    self.path.display()
                );
                LoadOutcome {
                    status: LoadStatus::Loaded {
                        count: entries.len(),
                    },
                    entries,
                }
            }
            Err(e) => {
                warn!(
                    "Failed to load high scores from {}: {}, starting empty",
                    self.path.display(),
                    e
                );
                LoadOutcome::empty(LoadStatus::Recovered {
                    reason: e.to_string(),
                })
            }
        }
    }

    fn read_entries(&self) -> Result<Vec<ScoreEntry>> {
        let json = self.fs.read_to_string(&self.path)?;
        // `null` is a valid (empty) board
        let entries: Option<Vec<ScoreEntry>> = serde_json::from_str(&json)?;
        Ok(entries.unwrap_or_default())
    }

    /// Insert an entry, re-rank, keep the top `MAX_ENTRIES` and persist.
    pub fn add(&mut self, entry: ScoreEntry) -> SaveStatus {
        self.entries.push(entry);
        self.entries.sort_by(ScoreEntry::rank_cmp);
        self.entries.truncate(MAX_ENTRIES);
        self.save()
    }

    /// Like `add`, for callers holding an optional entry.
    ///
    /// `None` is rejected with `Error::InvalidArgument` and nothing changes.
    pub fn try_add(&mut self, entry: Option<ScoreEntry>) -> Result<SaveStatus> {
        let entry =
            entry.ok_or_else(|| Error::InvalidArgument("score entry is required".to_string()))?;
        Ok(self.add(entry))
    }

    /// All entries, highest score first.
    ///
    /// With `ReadOrder::ScoreOnly` equal scores keep their stored order.
    pub fn get_all(&self) -> impl Iterator<Item = &ScoreEntry> {
        let mut view: Vec<&ScoreEntry> = self.entries.iter().collect();
        match self.read_order {
            ReadOrder::ScoreOnly => view.sort_by(|a, b| a.score_cmp(b)),
            ReadOrder::Ranked => view.sort_by(|a, b| a.rank_cmp(b)),
        }
        view.into_iter()
    }

    /// First `count` entries in stored order.
    pub fn get_top(&self, count: usize) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter().take(count)
    }

    pub fn clear(&mut self) -> SaveStatus {
        self.entries.clear();
        self.save()
    }

    fn save(&self) -> SaveStatus {
        match self.write_entries() {
            Ok(()) => {
                info!(
                    "High scores saved ({} entries) to {}",
                    self.entries.len(),
                    self.path.display()
                );
                SaveStatus::Saved
            }
            Err(e) => {
                error!(
                    "Failed to save high scores to {}: {}",
                    self.path.display(),
                    e
                );
                SaveStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn write_entries(&self) -> Result<()> {
        let json = format_json(&self.entries)?;
        self.fs.write_atomic(&self.path, &json)
    }

    /// Whether `entry` would stay on the board if added now.
    pub fn qualifies(&self, entry: &ScoreEntry) -> bool {
        self.potential_rank(entry).is_some()
    }

    /// 1-based rank `entry` would take if added now, `None` if it would be
    /// cut.
    ///
    /// Entries that compare equal stay ahead of the newcomer, as the stable
    /// re-sort in `add` leaves them.
    pub fn potential_rank(&self, entry: &ScoreEntry) -> Option<usize> {
        let ahead = self
            .entries
            .iter()
            .filter(|e| e.rank_cmp(entry) != Ordering::Greater)
            .count();
        let rank = ahead + 1;
        (rank <= MAX_ENTRIES).then_some(rank)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_order(&self) -> ReadOrder {
        self.read_order
    }

    /// Outcome of the load performed by `open`.
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }
}
