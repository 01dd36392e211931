//! File discovery for directory-backed sources.
//!
//! Walks the posts directory to find files that count as posts, applying include/exclude
//! patterns and skipping hidden entries and symlinks.

use std::{
    ffi::OsStr,
    path::{Component, Path},
};

use quire_config::CompiledPatterns;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::StoreError;

/// Discovers all post files under `root`.
///
/// Returns `/`-separated paths relative to `root`, sorted. A file is kept when it:
/// - Matches at least one include pattern and no exclude pattern
/// - Is a regular file (not a directory or symlink)
/// - Has no hidden (dot-prefixed) component in its relative path
///
/// Unreadable entries below the root are skipped with a warning.
pub fn discover_files(root: &Path, patterns: &CompiledPatterns) -> Result<Vec<String>, StoreError> {
    if !root.exists() {
        return Err(StoreError::SourceMissing {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(StoreError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(source) if source.depth() == 0 => {
                return Err(StoreError::Walk {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(error) => {
                warn!(%error, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(rel_path) = entry.path().strip_prefix(root) else {
            continue;
        };

        if !patterns.matches(rel_path) {
            continue;
        }

        let Some(identifier) = to_identifier(rel_path) else {
            warn!(path = %entry.path().display(), "skipping non-UTF-8 file name");
            continue;
        };
        files.push(identifier);
    }

    files.sort();
    debug!(root = %root.display(), files = files.len(), "discovered post files");
    Ok(files)
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Joins the normal components of a relative path with `/`.
fn to_identifier(rel_path: &Path) -> Option<String> {
    let parts = rel_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
