//! Simulated comment submission.
//!
//! There is no comment backend. Submitting moves the form into a posting
//! state; after a fixed delay the presenter calls [`CommentForm::complete`],
//! which hands back the accepted comment and returns the form to idle.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ulid::Ulid;

use crate::error::{BlogError, BlogResult};

/// Message shown once a comment has been "posted"
pub const ACKNOWLEDGEMENT: &str = "Thank you! Your feedback has been submitted successfully.";

/// Submit button label while idle
pub const SUBMIT_LABEL: &str = "Post Comment";

/// Submit button label while posting
pub const POSTING_LABEL: &str = "Posting...";

/// Unique identifier for an accepted comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub Ulid);

impl CommentId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "comment_{}", self.0)
    }
}

/// What the reader typed into the comment form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommentDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl CommentDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// A comment the form has accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedComment {
    pub id: CommentId,
    /// Catalog index of the post being commented on
    pub post_index: usize,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Unix timestamp of acceptance
    pub submitted_at: i64,
}

/// Form lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Posting {
        draft: CommentDraft,
        post_index: usize,
    },
}

/// Comment form state machine: `Idle → Posting → Idle`
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    state: SubmitState,
}

impl CommentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_posting(&self) -> bool {
        matches!(self.state, SubmitState::Posting { .. })
    }

    /// Label for the submit button in the current state
    pub fn button_label(&self) -> &'static str {
        if self.is_posting() {
            POSTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Start posting `draft` against the post at `post_index`
    pub fn submit(&mut self, draft: CommentDraft, post_index: usize) -> BlogResult<()> {
        if self.is_posting() {
            return Err(BlogError::SubmissionInProgress);
        }
        if draft.message.trim().is_empty() {
            return Err(BlogError::EmptyComment);
        }

        debug!(post_index, "Posting comment");
        self.state = SubmitState::Posting { draft, post_index };
        Ok(())
    }

    /// Finish the in-flight submission and return to idle
    pub fn complete(&mut self) -> BlogResult<SubmittedComment> {
        match std::mem::take(&mut self.state) {
            SubmitState::Idle => Err(BlogError::NoSubmissionPending),
            SubmitState::Posting { draft, post_index } => {
                let comment = SubmittedComment {
                    id: CommentId::new(),
                    post_index,
                    name: draft.name,
                    email: draft.email,
                    message: draft.message,
                    submitted_at: chrono::Utc::now().timestamp(),
                };
                info!(id = %comment.id, post_index, "Comment submitted");
                Ok(comment)
            }
        }
    }
}
