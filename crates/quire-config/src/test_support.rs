//! Filesystem sandbox for quire-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A throwaway directory tree holding config files and posts.
pub struct Sandbox {
    /// Removed on drop.
    root: TempDir,
}

impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Sandbox root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel_path` and its parents, returning the absolute path.
    pub fn mkdir(&self, rel_path: &str) -> PathBuf {
        let path = self.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `content` to `rel_path`, creating parent directories.
    pub fn write(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes a `.quire.toml` into `dir` (empty string for the sandbox root).
    pub fn config(&self, dir: &str, content: &str) -> PathBuf {
        let rel = if dir.is_empty() {
            CONFIG_FILENAME.to_string()
        } else {
            format!("{dir}/{CONFIG_FILENAME}")
        };
        self.write(&rel, content)
    }

    /// Writes a `.quire.toml` with `root = true` into `dir`.
    pub fn root_config(&self, dir: &str) -> PathBuf {
        self.config(dir, "root = true\n")
    }
}
