//! Detail view controller: the listing / single-article state machine.
//!
//! ```text
//!  Listing ──select(i)──▶ SingleArticle(i) ──close──▶ Listing
//!                              │  ▲
//!                              └──┘ select(j)
//! ```
//!
//! Selection is by catalog position only. An index outside the catalog is
//! rejected with [`BlogError::OutOfRangeSelection`] and the state is left
//! untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::article::{synthesize, Article};
use crate::catalog::PostCatalog;
use crate::error::BlogResult;
use crate::types::AccentColor;

/// Query fragment marking a listing-resolution image
pub const LISTING_WIDTH_PARAM: &str = "w=600";

/// Replacement requesting the hero-resolution variant
pub const HERO_WIDTH_PARAM: &str = "w=1200";

/// Swap the first `w=600` for `w=1200`; other URLs pass through unchanged.
///
/// This is substring substitution, not URL parsing.
pub fn hires_image_url(url: &str) -> String {
    url.replacen(LISTING_WIDTH_PARAM, HERO_WIDTH_PARAM, 1)
}

/// Which blog view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Listing,
    SingleArticle(usize),
}

impl ViewState {
    /// Selected index when an article is open
    pub fn selected(&self) -> Option<usize> {
        match self {
            ViewState::Listing => None,
            ViewState::SingleArticle(index) => Some(*index),
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self, ViewState::Listing)
    }
}

/// Side effect the presenter should perform after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Scroll the viewport back to the top
    Top,
}

/// Everything the single-article page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub index: usize,
    pub title: String,
    pub category: String,
    pub date: String,
    pub accent: AccentColor,
    /// Hero-resolution image URL
    pub hero_image: String,
    pub article: Article,
}

impl DetailView {
    /// Build the detail view for `catalog[index]`
    pub fn build(catalog: &PostCatalog, index: usize) -> BlogResult<Self> {
        let post = catalog.require(index)?;
        let title = post.display_title();
        let category = post.display_category();
        Ok(Self {
            index,
            title: title.to_string(),
            category: category.to_string(),
            date: post.date.clone(),
            accent: post.accent(),
            hero_image: hires_image_url(&post.image),
            article: synthesize(title, category),
        })
    }
}

/// Owns the [`ViewState`] and the populated detail view
#[derive(Debug, Clone, Default)]
pub struct DetailViewController {
    state: ViewState,
    current: Option<DetailView>,
}

impl DetailViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Populated view while an article is open
    pub fn current(&self) -> Option<&DetailView> {
        self.current.as_ref()
    }

    /// Open `catalog[index]`, from either state
    pub fn select(&mut self, catalog: &PostCatalog, index: usize) -> BlogResult<ScrollRequest> {
        let view = match DetailView::build(catalog, index) {
            Ok(view) => view,
            Err(e) => {
                warn!(index, len = catalog.len(), "Rejected article selection");
                return Err(e);
            }
        };

        info!(index, title = %view.title, "Opening article");
        self.state = ViewState::SingleArticle(index);
        self.current = Some(view);
        Ok(ScrollRequest::Top)
    }

    /// Return to the listing. Always succeeds.
    pub fn close(&mut self) -> ScrollRequest {
        if let ViewState::SingleArticle(index) = self.state {
            debug!(index, "Closing article");
        }
        self.state = ViewState::Listing;
        self.current = None;
        ScrollRequest::Top
    }
}
