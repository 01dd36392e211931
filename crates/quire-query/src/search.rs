//! Case-insensitive substring search over post metadata.
//!
//! A post matches when the lowercased query occurs in its title, excerpt, category, or any of
//! its tags. A blank query matches everything.

use quire_document::PostMetadata;

/// A prepared search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Lowercased needle, `None` for a blank query.
    needle: Option<String>,
}

impl SearchQuery {
    /// Prepares `query` for matching.
    ///
    /// Empty and whitespace-only queries match every post.
    pub fn new(query: &str) -> Self {
        let needle = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        Self { needle }
    }

    /// Returns true if this query matches every post.
    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    /// Tests a single post against the query.
    pub fn matches(&self, post: &PostMetadata) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        let hit = |field: &str| field.to_lowercase().contains(needle.as_str());

        hit(&post.title)
            || hit(&post.excerpt)
            || post.category.as_deref().is_some_and(hit)
            || post.tags.iter().any(|tag| hit(tag))
    }

    /// Filters `posts`, keeping order.
    pub fn filter<'a, T: AsRef<PostMetadata>>(&self, posts: &'a [T]) -> Vec<&'a T> {
        posts.iter().filter(|p| self.matches(p.as_ref())).collect()
    }
}

/// Returns the posts matching `query`, in their original order.
pub fn search<'a, T: AsRef<PostMetadata>>(query: &str, posts: &'a [T]) -> Vec<&'a T> {
    SearchQuery::new(query).filter(posts)
}
