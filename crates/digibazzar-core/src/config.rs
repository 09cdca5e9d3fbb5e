//! Session configuration shared by the desktop shell and the CLI.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BlogError, BlogResult};

/// Posts revealed per "load more" step
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Simulated network delay before a comment is acknowledged
pub const DEFAULT_COMMENT_DELAY_MS: u64 = 1500;

/// Tunables for a blog session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Posts per page; must be at least 1
    pub page_size: usize,
    /// Delay before a posted comment is acknowledged
    pub comment_delay_ms: u64,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            comment_delay_ms: DEFAULT_COMMENT_DELAY_MS,
        }
    }
}

impl BlogConfig {
    /// Override the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Reject settings no session can run with
    pub fn validate(&self) -> BlogResult<()> {
        if self.page_size == 0 {
            return Err(BlogError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }

    pub fn comment_delay(&self) -> Duration {
        Duration::from_millis(self.comment_delay_ms)
    }
}
