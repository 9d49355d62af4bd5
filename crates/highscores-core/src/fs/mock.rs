//! In-memory filesystem for testing
//!
//! Stores files in a shared map and can be told to fail reads, writes or
//! renames so degraded-persistence paths can be exercised.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::fs::FileSystem;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    fail_reads: bool,
    fail_writes: bool,
    fail_renames: bool,
    fail_create_dir: bool,
}

/// In-memory `FileSystem`.
///
/// Clones share the same files, so a test can keep a handle after moving one
/// into a `ScoreStore`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    state: Rc<RefCell<State>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem with one file already present
    pub fn with_file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let fs = Self::new();
        fs.insert(path, contents);
        fs
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.state
            .borrow_mut()
            .files
            .insert(path.into(), contents.into());
    }

    /// Current contents of `path`, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.borrow().files.get(path.as_ref()).cloned()
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.state.borrow().files.keys().cloned().collect()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.borrow().dirs.contains(path.as_ref())
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    pub fn fail_renames(&self, fail: bool) {
        self.state.borrow_mut().fail_renames = fail;
    }

    pub fn fail_create_dir(&self, fail: bool) {
        self.state.borrow_mut().fail_create_dir = fail;
    }
}

fn injected(op: &str, path: &Path) -> Error {
    Error::Io(io::Error::other(format!(
        "injected {} failure: {}",
        op,
        path.display()
    )))
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.state.borrow().files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(injected("read", path));
        }
        state.files.get(path).cloned().ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            ))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(injected("write", path));
        }
        state.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_create_dir {
            return Err(injected("create_dir", path));
        }
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_renames {
            return Err(injected("rename", from));
        }
        let contents = state.files.remove(from).ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", from.display()),
            ))
        })?;
        state.files.insert(to.to_path_buf(), contents);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.state.borrow_mut().files.remove(path);
        Ok(())
    }
}
