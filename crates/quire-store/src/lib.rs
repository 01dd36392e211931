//! Document sources and the cached post collection for quire.
//!
//! A [`DocumentSource`] enumerates raw post documents; [`DirectorySource`] reads them from a
//! posts directory and [`MemorySource`] holds them in memory. A [`DocumentStore`] enumerates a
//! source once, then builds the recency-ordered [`Collection`] on first use and caches it.
//! Documents that can't be loaded are left out of the collection and reported as
//! [`LoadFailure`]s rather than failing the whole listing.
//!
//! # Example
//!
//! ```
//! use quire_store::{DocumentStore, MemorySource};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = MemorySource::new()
//!     .with("old.md", "---\ntitle: Old\ndate: 2025-01-01\n---\nOld post.")
//!     .with("new.md", "---\ntitle: New\ndate: 2025-06-01\n---\nNew post.");
//! let store = DocumentStore::open(source).await.unwrap();
//!
//! let collection = store.list_all().await;
//! assert_eq!(collection.posts[0].slug, "new");
//! assert!(store.get("missing").await.unwrap().is_none());
//! # });
//! ```

#![warn(missing_docs)]

mod directory;
mod discovery;
mod error;
mod memory;
mod source;
mod store;

pub use directory::DirectorySource;
pub use discovery::discover_files;
pub use error::StoreError;
pub use memory::MemorySource;
pub use source::DocumentSource;
pub use store::{Collection, DocumentStore, LoadFailure};
