//! "Load more" pagination over the post catalog.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::{BlogError, BlogResult};

/// How many catalog pages are currently revealed
///
/// Starts at page 1 and only ever grows; there is no "show less".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    current_page: usize,
}

impl PaginationState {
    /// Create pagination with the given page size, starting at page 1
    pub fn new(page_size: usize) -> BlogResult<Self> {
        if page_size == 0 {
            return Err(BlogError::InvalidPageSize(page_size));
        }
        Ok(Self {
            page_size,
            current_page: 1,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Reveal one more page. Exhaustion is not checked here; see
    /// [`more_available`](Self::more_available).
    pub fn advance(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    /// Reveal pages up to `page` in one step. Never hides pages already shown.
    pub fn advance_to(&mut self, page: usize) {
        self.current_page = self.current_page.max(page);
    }

    /// `min(page_size * current_page, catalog_len)`
    pub fn visible_count(&self, catalog_len: usize) -> usize {
        self.page_size
            .saturating_mul(self.current_page)
            .min(catalog_len)
    }

    /// True while some posts are still hidden
    pub fn more_available(&self, catalog_len: usize) -> bool {
        self.visible_count(catalog_len) < catalog_len
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}
