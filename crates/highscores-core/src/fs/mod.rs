//! Filesystem abstraction for testability.
//!
//! `ScoreStore` only touches storage through `FileSystem`, so tests can run
//! against `MemoryFileSystem` instead of real user directories.

mod mock;

pub use mock::MemoryFileSystem;

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Result;

/// Trait for the file operations the store needs.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Create or truncate `path` and write `contents`.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Move `from` to `to`, replacing `to` if it exists.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Replace `path` with `contents` without ever leaving a partial file.
    ///
    /// Writes a sibling temp file and renames it over the target. The temp
    /// file is removed if either step fails, and the target is untouched.
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let tmp = temp_path_for(path);

        if let Err(e) = self.write(&tmp, contents) {
            let _ = self.remove_file(&tmp);
            return Err(e);
        }
        if let Err(e) = self.rename(&tmp, path) {
            let _ = self.remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }
}

/// `highscores.json` -> `highscores.json.tmp` in the same directory.
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(OsString::new);
    name.push(".tmp");
    path.with_file_name(name)
}

/// `FileSystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to)?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path)?;
        Ok(())
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        // Dropped (and deleted) on any early return
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_path_for() {
        let tmp = temp_path_for(Path::new("/data/SolidSnake/highscores.json"));
        assert_eq!(tmp, PathBuf::from("/data/SolidSnake/highscores.json.tmp"));
    }

    #[test]
    fn test_std_write_atomic_replaces_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("highscores.json");
        let fs = StdFileSystem;

        fs.write(&path, "old").unwrap();
        fs.write_atomic(&path, "new").unwrap();

        assert_eq!(fs.read_to_string(&path).unwrap(), "new");
        let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_std_write_atomic_into_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("highscores.json");

        assert!(StdFileSystem.write_atomic(&path, "[]").is_err());
        assert!(!StdFileSystem.exists(&path));
    }

    #[test]
    fn test_std_exists_ignores_directories() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!StdFileSystem.exists(temp_dir.path()));
    }
}
