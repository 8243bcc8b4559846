//! Pure pagination arithmetic shared by every listing endpoint.
//!
//! Two request styles are supported: classic `page`/`limit` paginators and
//! `skip`/`limit` offsets for infinite-scroll clients. Both resolve to the
//! same offset math and the same response metadata.

use serde::Serialize;

/// A resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
    pub current_page: u64,
}

impl PageRequest {
    /// Page mode: 1-based `page` plus `limit`. A page of 0 is treated as 1.
    /// The offset saturates instead of overflowing; an absurd page simply
    /// lands past the data and yields an empty list.
    pub fn from_page(page: u64, limit: u64) -> Self {
        let page = page.max(1);
        Self {
            offset: page.saturating_sub(1).saturating_mul(limit),
            limit,
            current_page: page,
        }
    }

    /// Skip mode: raw record offset plus `limit`.
    /// `current_page = skip / limit + 1` by integer division.
    pub fn from_skip(skip: u64, limit: u64) -> Self {
        let current_page = if limit == 0 {
            1
        } else {
            (skip / limit).saturating_add(1)
        };
        Self {
            offset: skip,
            limit,
            current_page,
        }
    }
}

/// `ceil(total_items / limit)`, falling back to 1 when `limit` is 0 so the
/// division can never panic.
pub fn total_pages(total_items: u64, limit: u64) -> u64 {
    if limit == 0 {
        1
    } else {
        total_items.div_ceil(limit)
    }
}

/// One page of results plus the metadata every listing response carries.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

impl<T> Paginated<T> {
    /// Assemble a page from fetched items and the total matching count.
    /// An out-of-range request simply yields an empty `items` list.
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            current_page: request.current_page,
            total_pages: total_pages(total_items, request.limit),
            total_items,
        }
    }
}
