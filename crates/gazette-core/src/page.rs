//! Paginator - page-window computation over ordered sequences.

use serde::{Deserialize, Serialize};

/// Pagination metadata reported alongside a page window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of an ordered sequence plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Slice one page out of an ordered sequence.
///
/// `page` is 1-indexed. Out-of-range inputs are clamped rather than
/// rejected: `page` below 1 becomes 1 and `limit` below 1 becomes 1.
/// Requesting a page past the end yields empty data with a still-valid
/// pagination block.
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> Page<T> {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(limit as usize) as u32;
    let start = (page as usize - 1) * limit as usize;

    let data: Vec<T> = items.into_iter().skip(start).take(limit as usize).collect();

    Page {
        data,
        pagination: Pagination {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}
