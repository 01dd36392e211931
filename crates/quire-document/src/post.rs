//! Post records produced by field derivation.

use serde::{Deserialize, Serialize};

/// Title used when a post declares none.
pub const UNTITLED: &str = "Untitled";

/// Listing metadata for a post.
///
/// This is everything a post carries except its body, and is what collection listings hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Stable identifier derived from the document's storage name.
    pub slug: String,
    /// Post title, [`UNTITLED`] if not declared.
    pub title: String,
    /// Publication date as `YYYY-MM-DD`.
    pub date: String,
    /// Short summary, declared or taken from the start of the body.
    pub excerpt: String,
    /// Author name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tags in declaration order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image URL or path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Estimated reading time in minutes, always at least 1.
    pub reading_time: u32,
}

impl PostMetadata {
    /// Upper-cased first character of the title, used as a cover placeholder.
    pub fn initial(&self) -> String {
        self.title
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// A post with its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Listing metadata.
    #[serde(flatten)]
    pub meta: PostMetadata,
    /// Body text with the header removed, trimmed.
    pub content: String,
}

impl Post {
    /// Discards the body, keeping only listing metadata.
    pub fn into_metadata(self) -> PostMetadata {
        self.meta
    }
}

impl AsRef<PostMetadata> for Post {
    fn as_ref(&self) -> &PostMetadata {
        &self.meta
    }
}

impl AsRef<PostMetadata> for PostMetadata {
    fn as_ref(&self) -> &PostMetadata {
        self
    }
}
