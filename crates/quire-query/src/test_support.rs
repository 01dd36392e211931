//! Test helpers shared across quire-query unit tests.

use quire_document::PostMetadata;

/// Builds a minimal post with the given slug and date.
pub fn post(slug: &str, date: &str) -> PostMetadata {
    PostMetadata {
        slug: slug.to_string(),
        title: slug.to_string(),
        date: date.to_string(),
        excerpt: String::new(),
        author: None,
        category: None,
        tags: vec![],
        cover_image: None,
        reading_time: 1,
    }
}
