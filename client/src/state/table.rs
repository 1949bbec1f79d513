//! Pagination state for list screens.
//!
//! DESIGN
//! ======
//! Derived from the last `Page<T>` envelope. The pager never fetches; it
//! only reports which page the caller should load next.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::net::types::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub limit: u32,
}

impl PageState {
    /// Nothing loaded yet.
    #[must_use]
    pub fn empty(limit: u32) -> Self {
        Self { page: 1, total_pages: 0, total_results: 0, limit }
    }

    /// Build from an envelope, preferring the server-reported limit.
    #[must_use]
    pub fn from_page<T>(page: &Page<T>, requested_limit: u32) -> Self {
        Self {
            page: page.page.max(1),
            total_pages: page.total_pages,
            total_results: page.total_results,
            limit: page.limit.unwrap_or(requested_limit),
        }
    }

    /// The pager is shown only when results overflow a single page and the
    /// current page is one the backend still has.
    #[must_use]
    pub fn pager_visible(&self) -> bool {
        self.total_results > u64::from(self.limit) && !self.is_past_end()
    }

    /// Last page that exists; an empty list still has page 1.
    #[must_use]
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// True once deletions have shrunk the list below the current page.
    #[must_use]
    pub fn is_past_end(&self) -> bool {
        self.page > self.last_page()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page to load for "previous", or `None` on the first page.
    #[must_use]
    pub fn prev(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    /// Page to load for "next", or `None` on the last page.
    #[must_use]
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// e.g. `"Showing 11-20 of 45"`.
    #[must_use]
    pub fn range_label(&self) -> String {
        if self.total_results == 0 {
            return "No results".to_owned();
        }
        let limit = u64::from(self.limit.max(1));
        let start = u64::from(self.page - 1) * limit + 1;
        let end = (u64::from(self.page) * limit).min(self.total_results);
        format!("Showing {start}-{end} of {}", self.total_results)
    }
}

/// Page to reload when an envelope comes back empty past the last page.
#[must_use]
pub fn fallback_page<T>(page: &Page<T>) -> Option<u32> {
    if !page.results.is_empty() {
        return None;
    }
    let state = PageState::from_page(page, 1);
    state.is_past_end().then(|| state.last_page())
}
