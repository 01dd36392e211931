//! Error types for collection queries.

use thiserror::Error;

/// Errors that can occur when building a query over a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Page numbers start at 1.
    #[error("page numbers start at 1")]
    ZeroPage,

    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}
