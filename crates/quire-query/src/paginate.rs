//! Page slicing over an ordered sequence.

use serde::Serialize;

use crate::QueryError;

/// A validated, 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number.
    page: usize,
    /// Items per page.
    page_size: usize,
}

impl PageRequest {
    /// Creates a request for page `page` (starting at 1) of `page_size` items.
    pub fn new(page: usize, page_size: usize) -> Result<Self, QueryError> {
        if page == 0 {
            return Err(QueryError::ZeroPage);
        }
        if page_size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        Ok(Self { page, page_size })
    }

    /// The first page of `page_size` items.
    pub fn first(page_size: usize) -> Result<Self, QueryError> {
        Self::new(1, page_size)
    }

    /// The requested page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The requested page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// One page of items plus the totals needed to render pager controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// The requested page number.
    pub page: usize,
    /// The requested page size.
    pub page_size: usize,
    /// Length of the whole sequence.
    pub total_items: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Returns true if a later page has items.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Maps the items of this page, keeping the totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Number of pages needed for `len` items, never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Returns the requested page of `items`.
///
/// Pages past the end are empty; the totals are still reported.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let len = items.len();
    let start = (request.page - 1).saturating_mul(request.page_size).min(len);
    let end = start.saturating_add(request.page_size).min(len);

    Page {
        items: items[start..end].to_vec(),
        page: request.page,
        page_size: request.page_size,
        total_items: len,
        total_pages: total_pages(len, request.page_size),
    }
}
