//! Field derivation: turns a parsed header and body into a [`Post`].
//!
//! Each field is derived on its own:
//! - `title` falls back to [`UNTITLED`]
//! - `date` is normalized to `YYYY-MM-DD`, falling back to the clock's date
//! - `excerpt` falls back to the first [`EXCERPT_LENGTH`] characters of the body plus `...`
//! - `tags` are taken from a list value, or from an inline `[a, b]` scalar; any other scalar
//!   is discarded
//! - `author`, `category` and `coverImage` pass through unchanged
//! - `readingTime` is estimated from the body
//!
//! Empty scalar values count as absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{
    Clock, HeaderValue, ParsedHeader, Post, PostMetadata, UNTITLED, header::strip_quotes,
    parse_header, reading_time,
};

/// Number of body characters used for a fallback excerpt.
pub const EXCERPT_LENGTH: usize = 150;

/// Appended to fallback excerpts.
const ELLIPSIS: &str = "...";

/// Output format for normalized dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-only layouts accepted in the `date` field.
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Date-time layouts (without offset) accepted in the `date` field.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parses a raw document into a post.
///
/// This is [`parse_header`] followed by [`derive_post`].
pub fn parse_post(slug: &str, content: &str, clock: &dyn Clock) -> Post {
    let (header, body) = parse_header(content);
    derive_post(slug, &header, body, clock)
}

/// Builds a fully populated post from a parsed header and body.
pub fn derive_post(slug: &str, header: &ParsedHeader, body: &str, clock: &dyn Clock) -> Post {
    let meta = PostMetadata {
        slug: slug.to_string(),
        title: text_field(header, "title").unwrap_or_else(|| UNTITLED.to_string()),
        date: derive_date(text_field(header, "date").as_deref(), clock),
        excerpt: text_field(header, "excerpt").unwrap_or_else(|| fallback_excerpt(body)),
        author: text_field(header, "author"),
        category: text_field(header, "category"),
        tags: derive_tags(header.get("tags")),
        cover_image: text_field(header, "coverImage"),
        reading_time: reading_time(body),
    };

    Post {
        meta,
        content: body.to_string(),
    }
}

/// Returns a non-empty scalar value for `key`.
fn text_field(header: &ParsedHeader, key: &str) -> Option<String> {
    match header.get(key) {
        Some(HeaderValue::Scalar(value)) if !value.is_empty() => Some(value.clone()),
        Some(HeaderValue::Scalar(_) | HeaderValue::List(_)) | None => None,
    }
}

/// Tags come from a list value or an inline `[a, b]` scalar; any other scalar is discarded.
fn derive_tags(value: Option<&HeaderValue>) -> Vec<String> {
    match value {
        Some(HeaderValue::List(items)) => items.clone(),
        Some(HeaderValue::Scalar(raw)) => inline_list(raw).unwrap_or_default(),
        None => Vec::new(),
    }
}

/// Splits an inline `[a, "b", 'c']` list. Empty items are dropped.
fn inline_list(raw: &str) -> Option<Vec<String>> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;
    Some(
        inner
            .split(',')
            .map(|item| strip_quotes(item.trim()))
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Normalizes a declared date, or stamps the clock's date if it is missing or unparseable.
fn derive_date(raw: Option<&str>, clock: &dyn Clock) -> String {
    raw.and_then(normalize_date)
        .unwrap_or_else(|| clock.today())
        .format(DATE_FORMAT)
        .to_string()
}

/// Parses the date layouts accepted in headers.
///
/// Timestamps carrying an offset are converted to UTC before the date is taken.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Some(date) = DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(raw, layout).ok())
    {
        return Some(date);
    }
    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|dt| dt.date())
}

/// First [`EXCERPT_LENGTH`] characters of the body followed by an ellipsis.
fn fallback_excerpt(body: &str) -> String {
    let mut excerpt: String = body.chars().take(EXCERPT_LENGTH).collect();
    excerpt.push_str(ELLIPSIS);
    excerpt
}
