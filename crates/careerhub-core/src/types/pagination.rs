//! Pagination types for job listings.
//!
//! The API paginates with `skip`/`limit`; callers think in 1-based pages.

use serde::{Deserialize, Serialize};

/// Request parameters for a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request. Both values are clamped to at least 1.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// The `skip` query value: `(page - 1) * page_size`.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1) * self.page_size
    }

    /// The `limit` query value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

/// Previous/next navigation state for a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNav {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of matching items.
    pub total_items: u64,
    /// `ceil(total_items / page_size)`.
    pub total_pages: u64,
    /// Whether "Previous" is enabled.
    pub has_previous: bool,
    /// Whether "Next" is enabled.
    pub has_next: bool,
}

impl PageNav {
    /// Compute navigation state for a page of a listing.
    ///
    /// "Previous" is disabled exactly on page 1; "Next" is disabled exactly
    /// when `page * page_size >= total_items`.
    pub fn new(page: u64, page_size: u64, total_items: u64) -> Self {
        let page_size = page_size.max(1);
        Self {
            page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size),
            has_previous: page != 1,
            has_next: page.saturating_mul(page_size) < total_items,
        }
    }

    /// Human-readable `Page X of Y` label.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}
