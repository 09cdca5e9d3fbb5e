//! Post catalog: the fixed, ordered list of posts available to a session.
//!
//! The catalog is built once at startup (from the compiled-in seed set or a
//! JSON file) and never mutated afterwards. Posts are addressed purely by
//! their zero-based position.

mod seed;

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{BlogError, BlogResult};
use crate::types::PostRecord;
use seed::SEED_POSTS;

/// Immutable ordered collection of posts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostCatalog {
    posts: Vec<PostRecord>,
}

impl PostCatalog {
    /// Create a catalog from records in display order
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self { posts }
    }

    /// The 50 posts the site ships with
    pub fn seed() -> Self {
        let posts = SEED_POSTS
            .iter()
            .map(|p| PostRecord::new(p.title, p.category, p.date, p.color, p.image, p.desc))
            .collect();
        Self { posts }
    }

    /// Parse a JSON array of post objects.
    ///
    /// Missing fields default to empty strings; use [`validate`](Self::validate)
    /// to list records that will render in degraded form.
    pub fn from_json(json: &str) -> BlogResult<Self> {
        let posts: Vec<PostRecord> = serde_json::from_str(json)?;
        let catalog = Self { posts };

        let issues = catalog.validate();
        if !issues.is_empty() {
            warn!(count = issues.len(), "Catalog contains malformed entries");
        }
        debug!(posts = catalog.len(), "Catalog parsed");
        Ok(catalog)
    }

    /// Read and parse a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> BlogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        debug!(?path, "Loading catalog");
        Self::from_json(&json)
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the catalog has no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Post at `index`, if any
    pub fn get(&self, index: usize) -> Option<&PostRecord> {
        self.posts.get(index)
    }

    /// Post at `index`, or `OutOfRangeSelection`
    pub fn require(&self, index: usize) -> BlogResult<&PostRecord> {
        self.posts.get(index).ok_or(BlogError::OutOfRangeSelection {
            index,
            len: self.posts.len(),
        })
    }

    /// All posts in order
    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    /// Distinct categories in first-appearance order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for post in &self.posts {
            let category = post.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Report records that are missing a required field or carry an unknown
    /// color. The catalog itself stays usable.
    pub fn validate(&self) -> Vec<BlogError> {
        let mut issues = Vec::new();
        for (index, post) in self.posts.iter().enumerate() {
            let mut problems = Vec::new();
            if post.title.trim().is_empty() {
                problems.push("missing title".to_string());
            }
            if post.category.trim().is_empty() {
                problems.push("missing category".to_string());
            }
            if post.accent_tag().is_none() {
                problems.push(format!("unknown color '{}'", post.color));
            }
            if !problems.is_empty() {
                issues.push(BlogError::MalformedCatalogEntry {
                    index,
                    reason: problems.join(", "),
                });
            }
        }
        issues
    }
}

impl From<Vec<PostRecord>> for PostCatalog {
    fn from(posts: Vec<PostRecord>) -> Self {
        Self::new(posts)
    }
}
