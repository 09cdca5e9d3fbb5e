use dioxus::prelude::*;
use digibazzar_core::BlogSession;

use crate::context::initial_session;
use crate::pages::{Blog, Home};
use crate::theme::{brand_palette_css, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Agency home page
/// - `/blog` - Blog listing, or the open article
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/blog")]
    Blog {},
}

/// Root application component.
///
/// Provides global styles, the blog session context, and routing.
#[component]
pub fn App() -> Element {
    let session: Signal<BlogSession> = use_signal(initial_session);

    // Provide the session to all child components
    use_context_provider(|| session);

    rsx! {
        style { {brand_palette_css()} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
