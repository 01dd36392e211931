//! Error types for loading post documents.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a single document.
///
/// Parsing itself never fails; these cover getting the raw text in the first place.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file.
    #[error("failed to read document {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid UTF-8 text.
    #[error("document is not valid UTF-8: {path}")]
    InvalidUtf8 {
        /// Path to the file.
        path: PathBuf,
    },

    /// No slug can be derived from the document's storage name.
    #[error("cannot derive a slug from {identifier}")]
    NoSlug {
        /// The storage name.
        identifier: String,
    },

    /// Another document already claimed this slug.
    #[error("duplicate slug '{slug}' from {identifier}")]
    DuplicateSlug {
        /// The contested slug.
        slug: String,
        /// The storage name of the rejected document.
        identifier: String,
    },
}
