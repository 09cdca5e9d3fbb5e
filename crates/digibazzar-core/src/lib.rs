//! The Digibazzar Blog Core
//!
//! Listing, pagination and single-post logic behind the agency website.
//!
//! ## Overview
//!
//! The blog is a fixed catalog of posts shown a page at a time. Readers
//! reveal more posts with "load more" and open any card to read a long-form
//! article that is synthesized from the post's title and category. Nothing is
//! fetched or stored; every operation works on data resident at startup.
//!
//! ## Components
//!
//! - **Catalog**: ordered, immutable post records ([`PostCatalog`])
//! - **Pagination**: how many posts are visible ([`PaginationState`])
//! - **Listing**: cards for the visible prefix ([`render_listing`])
//! - **Article**: template-based body synthesis ([`synthesize`])
//! - **Detail view**: listing / single-article state ([`DetailViewController`])
//! - **Comments**: simulated comment posting ([`CommentForm`])
//!
//! ## Quick Start
//!
//! ```
//! use digibazzar_core::BlogSession;
//!
//! let mut session = BlogSession::with_seed();
//! assert_eq!(session.listing().cards.len(), 9);
//!
//! session.load_more();
//! session.select(10)?;
//! let post = session.detail().expect("article is open");
//! println!("{}\n\n{}", post.title, post.article.to_markdown());
//! # Ok::<(), digibazzar_core::BlogError>(())
//! ```

pub mod article;
pub mod catalog;
pub mod comments;
pub mod config;
pub mod detail;
pub mod error;
pub mod listing;
pub mod pagination;
pub mod session;
pub mod types;

// Re-exports
pub use article::{synthesize, Article, Block, Inline};
pub use catalog::PostCatalog;
pub use comments::{CommentDraft, CommentForm, CommentId, SubmitState, SubmittedComment};
pub use config::BlogConfig;
pub use detail::{hires_image_url, DetailView, DetailViewController, ScrollRequest, ViewState};
pub use error::{BlogError, BlogResult};
pub use listing::{render_listing, render_page, BlogCard, Listing};
pub use pagination::PaginationState;
pub use session::BlogSession;
pub use types::*;
