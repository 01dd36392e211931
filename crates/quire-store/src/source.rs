//! The boundary between the store and wherever post documents live.

use async_trait::async_trait;
use quire_document::DocumentError;

use crate::StoreError;

/// An enumerable set of raw post documents.
///
/// Identifiers are `/`-separated storage names such as `2024/recap.md`; the store derives each
/// post's slug from its identifier.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Lists every document identifier, in a stable order.
    ///
    /// An error here means the source could not be enumerated at all.
    async fn discover(&self) -> Result<Vec<String>, StoreError>;

    /// Reads the full raw text of one document.
    async fn read(&self, identifier: &str) -> Result<String, DocumentError>;
}
