//! Path resolution and display.
//!
//! Resolves relative and tilde-prefixed posts paths against the declaring config file's
//! directory, and shortens paths for terminal output.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured posts path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/blog`) - expanded to home directory
/// - Relative paths (`./posts`, `../shared`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// The path is not required to exist; a missing posts directory is reported by validation
/// instead.
pub fn resolve_posts_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Formats a path for display relative to `cwd`.
///
/// Paths inside `cwd` are shown relative to it. Paths under the home directory are shown with
/// a `~` prefix. Anything else is shown as-is.
pub fn format_path_for_display(path: &Path, cwd: &Path) -> String {
    if let Some(relative) = pathdiff::diff_paths(path, cwd)
        && !relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
    {
        if relative.as_os_str().is_empty() {
            return String::from(".");
        }
        return relative.display().to_string();
    }

    if let Ok(home) = home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        return Path::new("~").join(rest).display().to_string();
    }

    path.display().to_string()
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
