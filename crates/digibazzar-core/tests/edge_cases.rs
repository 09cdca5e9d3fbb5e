//! Edge case and boundary condition tests
//!
//! These tests verify the blog handles incomplete catalogs, out-of-range
//! selections and pagination limits without failing.

use std::io::Write;
use std::sync::Arc;

use digibazzar_core::listing::{DEFAULT_CATEGORY, UNTITLED_POST};
use digibazzar_core::{
    render_listing, AccentColor, BlogConfig, BlogError, BlogSession, PostCatalog, PostRecord,
    ViewState,
};

// ============================================================================
// Empty Catalog Tests
// ============================================================================

#[test]
fn test_empty_catalog_session() {
    let mut session = BlogSession::new(Arc::new(PostCatalog::default()), &BlogConfig::default())
        .unwrap();

    let listing = session.listing();
    assert!(listing.cards.is_empty());
    assert!(!listing.more_available);

    let err = session.select(0).unwrap_err();
    assert!(matches!(err, BlogError::OutOfRangeSelection { index: 0, len: 0 }));
    assert_eq!(session.view(), ViewState::Listing);
}

#[test]
fn test_single_post_catalog() {
    let catalog = PostCatalog::new(vec![PostRecord::new(
        "Only", "SEO", "Jan 1", "blue", "", "",
    )]);
    let listing = render_listing(&catalog, 9);
    assert_eq!(listing.cards.len(), 1);
    assert!(!listing.more_available);
}

// ============================================================================
// Malformed Entry Tests
// ============================================================================

#[test]
fn test_json_with_missing_and_unknown_fields() {
    let json = r#"[
        {"title": "Complete", "category": "SEO", "date": "Jan 1", "color": "orange",
         "image": "https://x/a?w=600", "desc": "ok", "author": "ignored"},
        {"color": "magenta"},
        {"title": "No image", "category": "Design", "color": "RED"}
    ]"#;
    let catalog = PostCatalog::from_json(json).unwrap();
    let listing = render_listing(&catalog, 3);

    assert_eq!(listing.cards.len(), 3);
    assert_eq!(listing.cards[1].title, UNTITLED_POST);
    assert_eq!(listing.cards[1].category, DEFAULT_CATEGORY);
    assert_eq!(listing.cards[1].accent, AccentColor::FALLBACK);
    assert_eq!(listing.cards[2].accent, AccentColor::Red);
    assert_eq!(listing.cards[2].image, None);

    // "RED" is not a canonical tag: it renders with the fallback and is reported
    let issues = catalog.validate();
    assert_eq!(issues.len(), 2);
    assert!(matches!(issues[0], BlogError::MalformedCatalogEntry { index: 1, .. }));
    assert!(matches!(issues[1], BlogError::MalformedCatalogEntry { index: 2, .. }));
}

#[test]
fn test_malformed_post_still_opens() {
    let catalog = Arc::new(PostCatalog::new(vec![PostRecord::default()]));
    let mut session = BlogSession::new(catalog, &BlogConfig::default()).unwrap();
    let card = session.listing().cards[0].clone();
    session.select(card.index).unwrap();

    let view = session.detail().unwrap();
    assert_eq!(view.title, card.title);
    assert_eq!(view.category, card.category);
    assert_eq!(view.title, UNTITLED_POST);
    assert!(view.article.headings().iter().all(|h| !h.contains("  ")));
    assert_eq!(view.hero_image, "");
    assert_eq!(view.accent, AccentColor::FALLBACK);
    assert!(!view.article.blocks.is_empty());
}

#[test]
fn test_catalog_from_missing_file() {
    let err = PostCatalog::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, BlogError::Io(_)));
}

#[test]
fn test_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"title": "From disk", "category": "Content", "color": "green"}}]"#
    )
    .unwrap();

    let catalog = PostCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.posts()[0].title, "From disk");
}

#[test]
fn test_catalog_not_an_array() {
    let err = PostCatalog::from_json(r#"{"title": "x"}"#).unwrap_err();
    assert!(matches!(err, BlogError::Serialization(_)));
}

// ============================================================================
// Selection Boundary Tests
// ============================================================================

#[test]
fn test_select_last_and_one_past() {
    let mut session = BlogSession::with_seed();
    assert!(session.select(49).is_ok());
    assert!(matches!(
        session.select(50),
        Err(BlogError::OutOfRangeSelection { index: 50, len: 50 })
    ));
    assert_eq!(session.view(), ViewState::SingleArticle(49));
}

#[test]
fn test_select_hidden_post() {
    // Selection is by catalog index, not by what is currently listed
    let mut session = BlogSession::with_seed();
    assert_eq!(session.visible_count(), 9);
    session.select(40).unwrap();
    assert_eq!(session.detail().unwrap().title, "Color Psychology");
}

#[test]
fn test_select_usize_max() {
    let mut session = BlogSession::with_seed();
    assert!(session.select(usize::MAX).is_err());
}

// ============================================================================
// Pagination Boundary Tests
// ============================================================================

#[test]
fn test_page_size_larger_than_catalog() {
    let config = BlogConfig::default().with_page_size(500);
    let session = BlogSession::new(Arc::new(PostCatalog::seed()), &config).unwrap();
    assert_eq!(session.visible_count(), 50);
    assert!(!session.more_available());
}

#[test]
fn test_page_size_one() {
    let config = BlogConfig::default().with_page_size(1);
    let mut session = BlogSession::new(Arc::new(PostCatalog::seed()), &config).unwrap();
    for expected in 2..=50 {
        assert_eq!(session.load_more().visible_count(), expected);
    }
    assert!(!session.more_available());
}

#[test]
fn test_huge_page_size_does_not_overflow() {
    let config = BlogConfig::default().with_page_size(usize::MAX);
    let mut session = BlogSession::new(Arc::new(PostCatalog::seed()), &config).unwrap();
    session.load_more();
    session.load_more();
    assert_eq!(session.visible_count(), 50);
}
