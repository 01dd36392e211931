//! Recency ordering.

use std::cmp::Ordering;

use quire_document::PostMetadata;

/// Sorts posts newest first.
///
/// The sort is stable: posts sharing a date keep their relative order.
pub fn sort_by_recency<T: AsRef<PostMetadata>>(posts: &mut [T]) {
    posts.sort_by(|a, b| compare_recency(a.as_ref(), b.as_ref()));
}

/// Orders `a` before `b` when `a` is more recent.
///
/// Dates are `YYYY-MM-DD`, so byte order is calendar order.
pub fn compare_recency(a: &PostMetadata, b: &PostMetadata) -> Ordering {
    b.date.cmp(&a.date)
}

/// Returns true if `posts` is ordered newest first.
pub fn is_sorted_by_recency<T: AsRef<PostMetadata>>(posts: &[T]) -> bool {
    posts
        .windows(2)
        .all(|pair| compare_recency(pair[0].as_ref(), pair[1].as_ref()) != Ordering::Greater)
}
