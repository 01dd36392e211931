//! Error types for the quire-store crate.

use std::path::PathBuf;

use quire_config::ConfigError;
use thiserror::Error;

/// Errors that prevent a document source from being enumerated at all.
///
/// Failures of individual documents are not errors at this level; they are collected as
/// [`LoadFailure`](crate::LoadFailure)s instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The source root does not exist.
    #[error("posts directory does not exist: {path}")]
    SourceMissing {
        /// The missing root.
        path: PathBuf,
    },

    /// The source root exists but is not a directory.
    #[error("posts path is not a directory: {path}")]
    NotADirectory {
        /// The offending root.
        path: PathBuf,
    },

    /// Walking the source root failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// Root being walked.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// The configured file patterns could not be compiled.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
