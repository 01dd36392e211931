//! An in-memory document source, for tests and for embedding quire in other programs.

use std::{
    io::{Error as IoError, ErrorKind},
    path::PathBuf,
};

use async_trait::async_trait;
use quire_document::DocumentError;

use crate::{DocumentSource, StoreError};

/// Post documents held as `(identifier, text)` pairs, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    /// Documents in discovery order.
    documents: Vec<(String, String)>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, builder style.
    #[must_use]
    pub fn with(mut self, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(identifier, text);
        self
    }

    /// Adds a document.
    pub fn insert(&mut self, identifier: impl Into<String>, text: impl Into<String>) {
        self.documents.push((identifier.into(), text.into()));
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if there are no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<I, T> FromIterator<(I, T)> for MemorySource
where
    I: Into<String>,
    T: Into<String>,
{
    fn from_iter<It: IntoIterator<Item = (I, T)>>(iter: It) -> Self {
        let mut source = Self::new();
        for (identifier, text) in iter {
            source.insert(identifier, text);
        }
        source
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn discover(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.documents.iter().map(|(id, _)| id.clone()).collect())
    }

    async fn read(&self, identifier: &str) -> Result<String, DocumentError> {
        self.documents
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| DocumentError::ReadFile {
                path: PathBuf::from(identifier),
                source: IoError::from(ErrorKind::NotFound),
            })
    }
}
