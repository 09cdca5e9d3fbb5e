//! Property-based tests for pagination, listing and article synthesis
//!
//! Uses proptest to verify the invariants the blog relies on.

use proptest::prelude::*;
use digibazzar_core::{
    hires_image_url, render_listing, synthesize, PaginationState, PostCatalog, PostRecord,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Short printable titles/categories
fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{1,40}")
        .expect("valid regex")
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

fn color_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("orange".to_string()),
        Just("blue".to_string()),
        Just("purple".to_string()),
        Just("green".to_string()),
        Just("red".to_string()),
        "[a-z]{0,8}",
    ]
}

fn record_strategy() -> impl Strategy<Value = PostRecord> {
    (label_strategy(), label_strategy(), color_strategy()).prop_map(|(title, category, color)| {
        PostRecord::new(
            title,
            category,
            "Jan 01, 2025",
            color,
            "https://images.example/p?w=600&q=80",
            "desc",
        )
    })
}

fn catalog_strategy(max: usize) -> impl Strategy<Value = PostCatalog> {
    prop::collection::vec(record_strategy(), 0..max).prop_map(PostCatalog::new)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After k advances, visible = min(p * (k + 1), |C|)
    #[test]
    fn visible_count_formula(len in 0usize..300, page_size in 1usize..50, k in 0usize..40) {
        let mut pagination = PaginationState::new(page_size).unwrap();
        for _ in 0..k {
            pagination.advance();
        }
        prop_assert_eq!(pagination.visible_count(len), (page_size * (k + 1)).min(len));
    }

    /// Visible count never decreases and never exceeds the catalog
    #[test]
    fn visible_count_monotonic(len in 0usize..300, page_size in 1usize..50, steps in 1usize..40) {
        let mut pagination = PaginationState::new(page_size).unwrap();
        let mut previous = pagination.visible_count(len);
        for _ in 0..steps {
            pagination.advance();
            let now = pagination.visible_count(len);
            prop_assert!(now >= previous);
            prop_assert!(now <= len);
            previous = now;
        }
    }

    /// "More available" is true iff visible < |C|, and once false stays false
    #[test]
    fn more_available_latches_off(len in 0usize..200, page_size in 1usize..30, steps in 1usize..30) {
        let mut pagination = PaginationState::new(page_size).unwrap();
        let mut exhausted = false;
        for _ in 0..steps {
            let more = pagination.more_available(len);
            prop_assert_eq!(more, pagination.visible_count(len) < len);
            if exhausted {
                prop_assert!(!more);
            }
            exhausted |= !more;
            pagination.advance();
        }
    }

    /// Rendering the same prefix twice yields identical cards
    #[test]
    fn listing_is_idempotent(catalog in catalog_strategy(40), visible in 0usize..60) {
        let first = render_listing(&catalog, visible);
        let second = render_listing(&catalog, visible);
        prop_assert_eq!(first, second);
    }

    /// Cards are the catalog prefix, in order, one per visible post
    #[test]
    fn listing_is_catalog_prefix(catalog in catalog_strategy(40), visible in 0usize..60) {
        let listing = render_listing(&catalog, visible);
        prop_assert_eq!(listing.cards.len(), visible.min(catalog.len()));
        prop_assert_eq!(listing.more_available, visible < catalog.len());
        for (i, card) in listing.cards.iter().enumerate() {
            prop_assert_eq!(card.index, i);
            prop_assert_eq!(&card.title, &catalog.posts()[i].title);
        }
    }

    /// Synthesis is a pure function of (title, category)
    #[test]
    fn synthesis_is_pure(title in label_strategy(), category in label_strategy()) {
        let a = synthesize(&title, &category);
        let b = synthesize(&title, &category);
        prop_assert_eq!(a.to_markdown(), b.to_markdown());
        prop_assert_eq!(a, b);
    }

    /// Title and category land in the lead paragraph and a heading
    #[test]
    fn synthesis_substitutes_slots(title in label_strategy(), category in label_strategy()) {
        let article = synthesize(&title, &category);
        let lead = article.lead().unwrap();
        prop_assert!(lead.contains(&title));
        prop_assert!(lead.contains(&category));
        prop_assert!(article.headings().iter().any(|h| h.contains(&title)));
    }

    /// Different titles give different articles
    #[test]
    fn synthesis_depends_on_title(a in label_strategy(), b in label_strategy(), category in label_strategy()) {
        prop_assume!(a != b);
        prop_assert_ne!(synthesize(&a, &category), synthesize(&b, &category));
    }

    /// URLs without "w=600" are never altered
    #[test]
    fn hires_leaves_other_urls(url in "https://[a-z]{1,10}/[a-z]{1,10}\\?q=[0-9]{1,3}") {
        prop_assert_eq!(hires_image_url(&url), url);
    }
}
