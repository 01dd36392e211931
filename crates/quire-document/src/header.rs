//! Metadata header parsing for post documents.
//!
//! A header is an optional block at the very start of a document, fenced by `---` lines:
//!
//! ```markdown
//! ---
//! title: "Hello"
//! category: notes
//! tags:
//!   - rust
//!   - parsing
//! ---
//!
//! Body starts here.
//! ```
//!
//! The block is decoded line by line into scalar and list values. Nothing is coerced at this
//! layer: every value stays a raw string, and lines that don't fit the grammar are skipped.

use std::collections::{HashMap, hash_map};

/// The delimiter line that opens and closes a header block.
const DELIMITER: &str = "---";

/// Marker that introduces a list item line. Must be followed by a space.
const LIST_MARKER: char = '-';

/// A single decoded header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    /// A `key: value` line.
    Scalar(String),
    /// One or more list items attached to a key.
    List(Vec<String>),
}

impl HeaderValue {
    /// Returns the scalar string, or `None` for list values.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns the list items, or `None` for scalar values.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Appends a list item, promoting a scalar into a list first.
    ///
    /// An empty scalar (a bare `key:` line) becomes an empty list, so `tags:` followed by
    /// items yields exactly those items.
    fn push_item(&mut self, item: String) {
        match self {
            Self::List(items) => items.push(item),
            Self::Scalar(scalar) => {
                let mut items = Vec::with_capacity(2);
                if !scalar.is_empty() {
                    items.push(std::mem::take(scalar));
                }
                items.push(item);
                *self = Self::List(items);
            }
        }
    }
}

/// Decoded header fields keyed by name.
///
/// Only keys declared in the header block are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Field values by key.
    fields: HashMap<String, HeaderValue>,
}

impl ParsedHeader {
    /// Creates an empty header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value declared for `key`.
    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.fields.get(key)
    }

    /// Returns the scalar value for `key`, ignoring list values.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(HeaderValue::as_scalar)
    }

    /// Returns true if `key` was declared.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of declared keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no keys were declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over all declared fields in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, HeaderValue> {
        self.fields.iter()
    }

    /// Sets a scalar value, replacing anything previously declared under `key`.
    pub fn insert_scalar(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(key.into(), HeaderValue::Scalar(value.into()));
    }

    /// Appends a list item under `key`, creating the list if needed.
    pub fn push_item(&mut self, key: &str, item: impl Into<String>) {
        let item = item.into();
        match self.fields.get_mut(key) {
            Some(value) => value.push_item(item),
            None => {
                self.fields
                    .insert(key.to_string(), HeaderValue::List(vec![item]));
            }
        }
    }
}

/// Splits a raw document into its header and body.
///
/// The header is recognised only when the text opens with a `---` line, has at least one
/// line of content, and is closed by another `---` line. Anything else (including a header
/// that never closes) yields an empty header with the whole input as body.
///
/// The returned body is trimmed of leading and trailing whitespace.
pub fn parse_header(content: &str) -> (ParsedHeader, &str) {
    let content = content.trim_start_matches('\u{feff}');
    match split_block(content) {
        Some((block, body)) => (parse_block(block), body.trim()),
        None => (ParsedHeader::new(), content.trim()),
    }
}

/// Locates the fenced block, returning `(block, rest)`.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let (first, mut rest) = next_line(content)?;
    if first != DELIMITER {
        return None;
    }

    let block_start = content.len() - rest.len();
    let mut seen_lines = 0usize;
    loop {
        let line_start = content.len() - rest.len();
        let (line, after) = next_line(rest)?;
        if line == DELIMITER && seen_lines > 0 {
            // Drop the newline before the closing delimiter from the block.
            let block = content[block_start..line_start].trim_end_matches(['\n', '\r']);
            return Some((block, after));
        }
        seen_lines += 1;
        rest = after;
    }
}

/// Splits off the first line, returning it without its terminator and trailing whitespace.
///
/// Returns `None` once the input is exhausted.
fn next_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    let (line, rest) = match text.find('\n') {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => (text, ""),
    };
    Some((line.trim_end(), rest))
}

/// Decodes the lines of a header block.
fn parse_block(block: &str) -> ParsedHeader {
    let mut header = ParsedHeader::new();
    let mut active_key: Option<String> = None;

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(item) = list_item(trimmed) {
            let item = strip_quotes(item.trim());
            if item.is_empty() {
                continue;
            }
            if let Some(key) = &active_key {
                header.push_item(key, item);
            }
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        header.insert_scalar(key, strip_quotes(value.trim()));
        active_key = Some(key.to_string());
    }

    header
}

/// Returns the item text if the line is a list item (`- item`, or a lone `-`).
fn list_item(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(LIST_MARKER)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix(' ')
}

/// Removes one matching pair of enclosing double or single quotes.
pub fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
