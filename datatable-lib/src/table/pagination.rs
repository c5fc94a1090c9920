//! Client-side pagination.

use serde::Deserialize;
use serde::Serialize;

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Pagination {
    /// First page with the given size (at least 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Number of pages for `total` rows. An empty set still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1)).max(1)
    }

    /// The page index clamped to the last page for `total` rows.
    pub fn clamped_index(&self, total: usize) -> usize {
        self.page_index.min(self.page_count(total) - 1)
    }

    /// Row range of the current page for `total` rows.
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let size = self.page_size.max(1);
        let start = (self.clamped_index(total) * size).min(total);
        let end = (start + size).min(total);
        start..end
    }

    /// Whether a previous page exists.
    pub fn can_previous(&self, total: usize) -> bool {
        self.clamped_index(total) > 0
    }

    /// Whether a next page exists.
    pub fn can_next(&self, total: usize) -> bool {
        self.clamped_index(total) + 1 < self.page_count(total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}
