use crate::entry::ScoreEntry;

/// How the board was obtained from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No file yet; the board starts empty.
    Missing,
    Loaded { count: usize },
    /// The file could not be read or parsed; the board starts empty.
    Recovered { reason: String },
}

impl LoadStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, LoadStatus::Recovered { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub entries: Vec<ScoreEntry>,
    pub status: LoadStatus,
}

impl LoadOutcome {
    pub(crate) fn empty(status: LoadStatus) -> Self {
        Self {
            entries: Vec::new(),
            status,
        }
    }
}

/// Result of writing the board after a mutation.
///
/// A failed save leaves the previous file in place; the in-memory board still
/// holds the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Failed { reason: String },
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}
