//! Collection queries for quire.
//!
//! Everything here operates on slices of post metadata (or anything that can be viewed as
//! post metadata), independent of where the collection came from:
//!
//! - **Ordering**: [`sort_by_recency`] puts the newest posts first, keeping ties stable
//! - **Search**: [`search`] keeps posts whose title, excerpt, category or tags contain the
//!   query, ignoring case
//! - **Pagination**: [`paginate`] slices one [`Page`] out of a sequence
//! - **Aggregates**: [`categories`] and [`tags`] list distinct values in first-seen order
//! - **Links**: [`canonical_url`] and [`escape_markup`] for feed and page consumers
//!
//! # Example
//!
//! ```
//! use quire_query::{PageRequest, paginate, search};
//! # use quire_document::{FixedClock, parse_post};
//! # let clock = FixedClock::ymd(2025, 1, 1).unwrap();
//! # let posts = vec![parse_post("a", "---\ntitle: Rust\n---\nBody", &clock).meta];
//!
//! let hits = search("rust", &posts);
//! let page = paginate(&hits, PageRequest::first(6).unwrap());
//! assert_eq!(page.total_pages, 1);
//! ```

#![warn(missing_docs)]

mod aggregate;
mod error;
mod links;
mod order;
mod paginate;
mod search;
#[cfg(test)]
mod test_support;

pub use aggregate::{categories, tags};
pub use error::QueryError;
pub use links::{canonical_url, escape_markup};
pub use order::{compare_recency, is_sorted_by_recency, sort_by_recency};
pub use paginate::{Page, PageRequest, paginate, total_pages};
pub use search::{SearchQuery, search};
