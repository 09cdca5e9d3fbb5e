//! Listing renderer: projects the visible prefix of the catalog into cards.
//!
//! Output is regenerated from scratch on every call, so rendering the same
//! prefix twice yields identical cards.

use serde::Serialize;
use tracing::warn;

use crate::catalog::PostCatalog;
use crate::pagination::PaginationState;
use crate::types::{AccentColor, PostRecord};

pub use crate::types::{DEFAULT_CATEGORY, UNTITLED_POST};

/// Summary card for one post in the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogCard {
    /// Catalog index the "read more" action opens
    pub index: usize,
    pub title: String,
    pub category: String,
    pub accent: AccentColor,
    /// Omitted when the record has no date
    pub date: Option<String>,
    /// Omitted when the record has no description
    pub desc: Option<String>,
    /// Listing-resolution image URL, passed through verbatim
    pub image: Option<String>,
}

impl BlogCard {
    /// Build a card, degrading gracefully on incomplete records
    pub fn from_record(index: usize, post: &PostRecord) -> Self {
        if post.accent_tag().is_none() {
            warn!(index, color = %post.color, "Unknown accent color, using fallback");
        }

        Self {
            index,
            title: post.display_title().to_string(),
            category: post.display_category().to_string(),
            accent: post.accent(),
            date: non_empty(&post.date),
            desc: non_empty(&post.desc),
            image: non_empty(&post.image),
        }
    }
}

/// One rendered listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub cards: Vec<BlogCard>,
    /// Whether a "load more" control should be offered
    pub more_available: bool,
    /// Total posts in the catalog
    pub total: usize,
}

impl Listing {
    pub fn visible_count(&self) -> usize {
        self.cards.len()
    }
}

/// Render cards for `catalog[0..visible_count)`.
///
/// `visible_count` larger than the catalog is clamped.
pub fn render_listing(catalog: &PostCatalog, visible_count: usize) -> Listing {
    let total = catalog.len();
    let visible = visible_count.min(total);

    let cards = catalog.posts()[..visible]
        .iter()
        .enumerate()
        .map(|(index, post)| BlogCard::from_record(index, post))
        .collect();

    Listing {
        cards,
        more_available: visible < total,
        total,
    }
}

/// Render the listing for a pagination state
pub fn render_page(catalog: &PostCatalog, pagination: &PaginationState) -> Listing {
    render_listing(catalog, pagination.visible_count(catalog.len()))
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> PostCatalog {
        PostCatalog::new(vec![
            PostRecord::new(
                "First",
                "SEO",
                "Jan 1, 2025",
                "orange",
                "https://x/1?w=600",
                "one",
            ),
            PostRecord::new(
                "Second",
                "Design",
                "Jan 2, 2025",
                "red",
                "https://x/2?w=600",
                "two",
            ),
            PostRecord::new("Third", "Web Dev", "", "green", "", ""),
        ])
    }

    #[test]
    fn test_render_prefix() {
        let listing = render_listing(&small_catalog(), 2);
        assert_eq!(listing.visible_count(), 2);
        assert_eq!(listing.cards[0].title, "First");
        assert_eq!(listing.cards[1].index, 1);
        assert!(listing.more_available);
        assert_eq!(listing.total, 3);
    }

    #[test]
    fn test_render_clamps() {
        let listing = render_listing(&small_catalog(), 100);
        assert_eq!(listing.visible_count(), 3);
        assert!(!listing.more_available);
    }

    #[test]
    fn test_card_fields() {
        let listing = render_listing(&small_catalog(), 1);
        let card = &listing.cards[0];
        assert_eq!(card.category, "SEO");
        assert_eq!(card.accent, AccentColor::Orange);
        assert_eq!(card.date.as_deref(), Some("Jan 1, 2025"));
        assert_eq!(card.image.as_deref(), Some("https://x/1?w=600"));
        assert_eq!(card.desc.as_deref(), Some("one"));
    }

    #[test]
    fn test_missing_optional_fields_omitted() {
        let listing = render_listing(&small_catalog(), 3);
        let card = &listing.cards[2];
        assert_eq!(card.date, None);
        assert_eq!(card.desc, None);
        assert_eq!(card.image, None);
    }

    #[test]
    fn test_bad_record_does_not_block_others() {
        let catalog = PostCatalog::new(vec![
            PostRecord::new("Good", "SEO", "Jan 1", "blue", "", "ok"),
            PostRecord::new("", "", "", "neon", "", ""),
            PostRecord::new("Also good", "PPC Ads", "Jan 3", "purple", "", "ok"),
        ]);
        let listing = render_listing(&catalog, 3);
        assert_eq!(listing.cards.len(), 3);
        assert_eq!(listing.cards[1].title, UNTITLED_POST);
        assert_eq!(listing.cards[1].category, DEFAULT_CATEGORY);
        assert_eq!(listing.cards[1].accent, AccentColor::FALLBACK);
        assert_eq!(listing.cards[2].accent, AccentColor::Purple);
    }

    #[test]
    fn test_render_is_idempotent() {
        let catalog = PostCatalog::seed();
        assert_eq!(render_listing(&catalog, 18), render_listing(&catalog, 18));
    }

    #[test]
    fn test_render_page() {
        let catalog = PostCatalog::seed();
        let mut pagination = PaginationState::default();
        assert_eq!(render_page(&catalog, &pagination).visible_count(), 9);
        pagination.advance();
        assert_eq!(render_page(&catalog, &pagination).visible_count(), 18);
    }

    #[test]
    fn test_empty_catalog() {
        let listing = render_listing(&PostCatalog::default(), 9);
        assert!(listing.cards.is_empty());
        assert!(!listing.more_available);
    }
}
