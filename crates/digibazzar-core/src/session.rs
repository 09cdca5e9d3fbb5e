//! Blog session: the catalog plus the two state machines a reader drives.

use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::PostCatalog;
use crate::config::BlogConfig;
use crate::detail::{DetailView, DetailViewController, ScrollRequest, ViewState};
use crate::error::BlogResult;
use crate::listing::{render_page, Listing};
use crate::pagination::PaginationState;

/// One reader's view of the blog
///
/// Pagination and view state are independent: opening and closing an article
/// keeps the listing at the same depth.
#[derive(Debug, Clone)]
pub struct BlogSession {
    catalog: Arc<PostCatalog>,
    pagination: PaginationState,
    detail: DetailViewController,
}

impl BlogSession {
    /// Start a session on page 1 in the listing view
    pub fn new(catalog: Arc<PostCatalog>, config: &BlogConfig) -> BlogResult<Self> {
        config.validate()?;
        let pagination = PaginationState::new(config.page_size)?;
        info!(
            posts = catalog.len(),
            page_size = config.page_size,
            "Blog session started"
        );
        Ok(Self {
            catalog,
            pagination,
            detail: DetailViewController::new(),
        })
    }

    /// Session over the built-in catalog with default settings
    pub fn with_seed() -> Self {
        Self {
            catalog: Arc::new(PostCatalog::seed()),
            pagination: PaginationState::default(),
            detail: DetailViewController::new(),
        }
    }

    pub fn catalog(&self) -> &PostCatalog {
        &self.catalog
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn view(&self) -> ViewState {
        self.detail.state()
    }

    pub fn visible_count(&self) -> usize {
        self.pagination.visible_count(self.catalog.len())
    }

    pub fn more_available(&self) -> bool {
        self.pagination.more_available(self.catalog.len())
    }

    /// Cards for the current page depth
    pub fn listing(&self) -> Listing {
        render_page(&self.catalog, &self.pagination)
    }

    /// Reveal the next page and re-render
    pub fn load_more(&mut self) -> Listing {
        self.pagination.advance();
        debug!(
            page = self.pagination.current_page(),
            visible = self.visible_count(),
            "Loaded more posts"
        );
        self.listing()
    }

    /// Reveal the first `pages` pages and render once
    pub fn load_pages(&mut self, pages: usize) -> Listing {
        self.pagination.advance_to(pages);
        debug!(
            page = self.pagination.current_page(),
            visible = self.visible_count(),
            "Loaded pages"
        );
        self.listing()
    }

    /// Open the article at `index`
    pub fn select(&mut self, index: usize) -> BlogResult<ScrollRequest> {
        self.detail.select(&self.catalog, index)
    }

    /// Back to the listing
    pub fn close(&mut self) -> ScrollRequest {
        self.detail.close()
    }

    /// Navigating away from the blog closes any open article
    pub fn leave_blog(&mut self) {
        if !self.detail.state().is_listing() {
            self.detail.close();
        }
    }

    /// The open article, if any
    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;

    #[test]
    fn test_seed_session() {
        let session = BlogSession::with_seed();
        assert_eq!(session.visible_count(), 9);
        assert!(session.more_available());
        assert!(session.view().is_listing());
    }

    #[test]
    fn test_invalid_config() {
        let catalog = Arc::new(PostCatalog::seed());
        let config = BlogConfig::default().with_page_size(0);
        assert!(matches!(
            BlogSession::new(catalog, &config),
            Err(BlogError::InvalidPageSize(0))
        ));
    }

    #[test]
    fn test_load_pages_renders_once_for_huge_depth() {
        let mut session = BlogSession::with_seed();
        let listing = session.load_pages(usize::MAX);
        assert_eq!(listing.visible_count(), 50);
        assert!(!listing.more_available);
        assert_eq!(session.pagination().current_page(), usize::MAX);
    }

    #[test]
    fn test_load_pages_matches_repeated_load_more() {
        let mut stepped = BlogSession::with_seed();
        stepped.load_more();
        stepped.load_more();

        let mut jumped = BlogSession::with_seed();
        assert_eq!(jumped.load_pages(3), stepped.listing());
    }

    #[test]
    fn test_load_more_until_exhausted() {
        let mut session = BlogSession::with_seed();
        let mut pages = 1;
        while session.more_available() {
            session.load_more();
            pages += 1;
        }
        assert_eq!(pages, 6);
        assert_eq!(session.listing().visible_count(), 50);

        // Further loads are harmless
        let listing = session.load_more();
        assert_eq!(listing.visible_count(), 50);
        assert!(!listing.more_available);
    }

    #[test]
    fn test_article_keeps_listing_depth() {
        let mut session = BlogSession::with_seed();
        session.load_more();
        session.select(12).unwrap();
        assert_eq!(session.detail().unwrap().index, 12);
        session.close();
        assert_eq!(session.visible_count(), 18);
    }

    #[test]
    fn test_leave_blog_closes_article() {
        let mut session = BlogSession::with_seed();
        session.select(0).unwrap();
        session.leave_blog();
        assert!(session.view().is_listing());
        assert!(session.detail().is_none());
    }
}
