//! Store configuration and leaderboard constants.

use std::path::{Path, PathBuf};

use strum::{Display, EnumString};

use crate::error::{Error, Result};

/// Maximum number of entries kept on the board.
pub const MAX_ENTRIES: usize = 10;

/// Default `count` for top-N reads.
pub const DEFAULT_TOP_COUNT: usize = 10;

/// Application folder created under the per-user data directory.
pub const DEFAULT_APP_DIR: &str = "SolidSnake";

pub const DEFAULT_FILE_NAME: &str = "highscores.json";

/// Ordering applied by `ScoreStore::get_all`.
///
/// `ScoreOnly` sorts by score alone and keeps stored order for ties, which is
/// how boards written by the game have always been read. `Ranked` applies the
/// same comparator as insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ReadOrder {
    #[default]
    ScoreOnly,
    Ranked,
}

/// Where the leaderboard file lives and how it is read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub app_dir_name: String,
    pub file_name: String,
    /// Explicit file path; skips data directory resolution when set.
    pub path: Option<PathBuf>,
    pub read_order: ReadOrder,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            app_dir_name: DEFAULT_APP_DIR.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            path: None,
            read_order: ReadOrder::default(),
        }
    }
}

impl StoreConfig {
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// `<data_root>/<app_dir_name>/<file_name>`
    pub fn resolve_path(&self, data_root: &Path) -> PathBuf {
        data_root.join(&self.app_dir_name).join(&self.file_name)
    }

    /// The explicit path if one is set, otherwise the path under the
    /// per-user data directory.
    pub fn file_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(self.resolve_path(&default_data_dir()?)),
        }
    }
}

#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    pub fn app_dir_name(mut self, name: impl Into<String>) -> Self {
        self.config.app_dir_name = name.into();
        self
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.config.file_name = name.into();
        self
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    pub fn read_order(mut self, order: ReadOrder) -> Self {
        self.config.read_order = order;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}

/// Per-user application data root (`%APPDATA%`, `~/.local/share`,
/// `~/Library/Application Support`).
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir().ok_or(Error::DataDirUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.app_dir_name, "SolidSnake");
        assert_eq!(config.file_name, "highscores.json");
        assert_eq!(config.read_order, ReadOrder::ScoreOnly);
        assert!(config.path.is_none());
    }

    #[test]
    fn test_resolve_path() {
        let config = StoreConfig::default();
        let path = config.resolve_path(Path::new("/home/user/.local/share"));
        assert_eq!(
            path,
            PathBuf::from("/home/user/.local/share/SolidSnake/highscores.json")
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = StoreConfig::builder()
            .app_dir_name("Other")
            .path("/tmp/board.json")
            .build();
        assert_eq!(config.file_path().unwrap(), PathBuf::from("/tmp/board.json"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = StoreConfig::builder()
            .app_dir_name("Tetris")
            .file_name("scores.json")
            .read_order(ReadOrder::Ranked)
            .build();
        assert_eq!(config.app_dir_name, "Tetris");
        assert_eq!(config.file_name, "scores.json");
        assert_eq!(config.read_order, ReadOrder::Ranked);
    }

    #[test]
    fn test_read_order_parse() {
        assert_eq!(ReadOrder::from_str("ranked").unwrap(), ReadOrder::Ranked);
        assert_eq!(
            ReadOrder::from_str("score-only").unwrap(),
            ReadOrder::ScoreOnly
        );
        assert!(ReadOrder::from_str("random").is_err());
        assert_eq!(ReadOrder::Ranked.to_string(), "ranked");
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_ENTRIES, 10);
        assert_eq!(DEFAULT_TOP_COUNT, 10);
    }
}
