//! A document source backed by a directory on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quire_config::{CompiledPatterns, Config};
use quire_document::DocumentError;
use tokio::fs;

use crate::{DocumentSource, StoreError, discovery::discover_files};

/// Post documents stored as files under one directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    /// Posts directory.
    root: PathBuf,
    /// Which files under `root` are posts.
    patterns: CompiledPatterns,
}

impl DirectorySource {
    /// Creates a source over `root` with the given patterns.
    pub fn new(root: impl Into<PathBuf>, patterns: CompiledPatterns) -> Self {
        Self {
            root: root.into(),
            patterns,
        }
    }

    /// Creates a source from the `[posts]` section of a loaded config.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Ok(Self::new(&config.posts.path, config.compile_patterns()?))
    }

    /// The posts directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl DocumentSource for DirectorySource {
    async fn discover(&self) -> Result<Vec<String>, StoreError> {
        discover_files(&self.root, &self.patterns)
    }

    async fn read(&self, identifier: &str) -> Result<String, DocumentError> {
        let path = self.root.join(identifier);
        let bytes = fs::read(&path)
            .await
            .map_err(|source| DocumentError::ReadFile {
                path: path.clone(),
                source,
            })?;
        String::from_utf8(bytes).map_err(|_| DocumentError::InvalidUtf8 { path })
    }
}
