//! Blog session context for The Digibazzar.
//!
//! Provides the reader's [`BlogSession`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page component
//! let mut session = use_blog_session();
//! let listing = session.read().listing();
//!
//! // In an event handler
//! if let Ok(scroll) = session.write().select(index) {
//!     scroll_to(scroll);
//! }
//! ```

use dioxus::prelude::*;
use digibazzar_core::{BlogConfig, BlogSession, ScrollRequest};

/// Get a fresh session built from the command line settings.
pub fn initial_session() -> BlogSession {
    crate::initial_session()
}

/// Get the blog configuration resolved at startup.
pub fn blog_config() -> BlogConfig {
    crate::blog_config()
}

/// Hook to access the blog session from context.
///
/// The session is a single signal; only the active event handler writes it.
pub fn use_blog_session() -> Signal<BlogSession> {
    use_context::<Signal<BlogSession>>()
}

/// Perform the scroll a view transition asked for.
pub fn scroll_to(request: ScrollRequest) {
    match request {
        ScrollRequest::Top => {
            let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
        }
    }
}
