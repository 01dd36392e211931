//! Distinct category and tag extraction.

use std::collections::HashSet;

use quire_document::PostMetadata;

/// Distinct categories in first-seen order. Posts without a category are skipped.
pub fn categories<T: AsRef<PostMetadata>>(posts: &[T]) -> Vec<String> {
    distinct(
        posts
            .iter()
            .filter_map(|p| p.as_ref().category.as_deref()),
    )
}

/// Distinct tags across all posts in first-seen order.
pub fn tags<T: AsRef<PostMetadata>>(posts: &[T]) -> Vec<String> {
    distinct(
        posts
            .iter()
            .flat_map(|p| p.as_ref().tags.iter().map(String::as_str)),
    )
}

/// Keeps the first occurrence of each value.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
