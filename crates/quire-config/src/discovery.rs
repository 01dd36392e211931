//! Locating `.quire.toml` files.
//!
//! Every ancestor of the working directory may hold a `.quire.toml`. The nearest one has the
//! highest precedence, the global `~/.quire.toml` the lowest. A file declaring `root = true`
//! seals the chain: nothing above it, global file included, is read.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".quire.toml";

/// Lists the config files that apply to `cwd`, nearest first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for candidate in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !candidate.is_file() {
            continue;
        }
        let sealed = is_root_config(&candidate);
        configs.push(candidate);
        if sealed {
            return configs;
        }
    }

    if let Some(global) = global_config_path().filter(|p| p.is_file() && !configs.contains(p)) {
        configs.push(global);
    }
    configs
}

/// Returns the path to the global configuration file (`~/.quire.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
