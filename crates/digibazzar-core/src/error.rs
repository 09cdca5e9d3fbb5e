//! Error types for The Digibazzar blog core

use thiserror::Error;

/// Main error type for blog operations
#[derive(Error, Debug)]
pub enum BlogError {
    /// Selected catalog index does not exist
    #[error("Post index {index} is out of range (catalog has {len} posts)")]
    OutOfRangeSelection { index: usize, len: usize },

    /// A catalog record is missing a required field or carries an unknown color
    #[error("Malformed catalog entry {index}: {reason}")]
    MalformedCatalogEntry { index: usize, reason: String },

    /// Pagination needs at least one post per page
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    /// Comment message was empty or whitespace only
    #[error("Comment message cannot be empty")]
    EmptyComment,

    /// A comment is already being posted
    #[error("A comment is already being posted")]
    SubmissionInProgress,

    /// `complete` was called with nothing in flight
    #[error("No comment submission is pending")]
    NoSubmissionPending,

    /// Catalog JSON could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using BlogError
pub type BlogResult<T> = Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlogError::OutOfRangeSelection { index: 7, len: 2 };
        assert_eq!(
            format!("{}", err),
            "Post index 7 is out of range (catalog has 2 posts)"
        );
    }

    #[test]
    fn test_malformed_entry_display() {
        let err = BlogError::MalformedCatalogEntry {
            index: 3,
            reason: "unknown color 'teal'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed catalog entry 3: unknown color 'teal'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let blog_err: BlogError = io_err.into();
        assert!(matches!(blog_err, BlogError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let blog_err: BlogError = json_err.into();
        assert!(matches!(blog_err, BlogError::Serialization(_)));
    }
}
