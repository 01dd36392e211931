//! Post parsing for quire.
//!
//! This crate turns the raw text of a post document into a typed [`Post`]:
//! - [`parse_header`] splits off the `---`-fenced metadata header and decodes it
//! - [`derive_post`] fills in defaulted and derived fields (title, date, excerpt, reading time)
//! - [`slug_from_path`] maps a storage name to the post's slug
//!
//! Nothing here fails on malformed input: a bad header is treated as no header and bad field
//! values fall back to defaults.
//!
//! # Example
//!
//! ```
//! use quire_document::{FixedClock, parse_post};
//!
//! let clock = FixedClock::ymd(2025, 1, 1).unwrap();
//! let post = parse_post("hello", "---\ntitle: Hello\n---\nBody text.", &clock);
//! assert_eq!(post.meta.title, "Hello");
//! assert_eq!(post.content, "Body text.");
//! ```

#![warn(missing_docs)]

mod clock;
mod derive;
mod error;
mod header;
mod post;
mod reading_time;
mod slug;

pub use clock::{Clock, FixedClock, SystemClock};
pub use derive::{EXCERPT_LENGTH, derive_post, normalize_date, parse_post};
pub use error::DocumentError;
pub use header::{HeaderValue, ParsedHeader, parse_header};
pub use post::{Post, PostMetadata, UNTITLED};
pub use reading_time::reading_time;
pub use slug::{slug_from_identifier, slug_from_path};
