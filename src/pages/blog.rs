//! Blog page - listing grid or the open article.
//!
//! The page is driven entirely by the [`BlogSession`](digibazzar_core::BlogSession)
//! in context: its view state decides which half renders.

use dioxus::prelude::*;
use digibazzar_core::{DetailView, ViewState};
use digibazzar_ui::{Button, ButtonVariant, CategoryBadge, CloseButton};

use crate::components::{ArticleBody, BlogCardView, CommentSection, NavHeader, NavLocation};
use crate::context::{scroll_to, use_blog_session};

#[component]
pub fn Blog() -> Element {
    let mut session = use_blog_session();

    // Navigating away from the blog closes the open article
    use_drop(move || {
        session.write().leave_blog();
    });

    let open = match session.read().view() {
        ViewState::Listing => None,
        ViewState::SingleArticle(_) => session.read().detail().cloned(),
    };

    let content = match open {
        Some(detail) => rsx! { SinglePost { detail } },
        None => rsx! { BlogListing {} },
    };

    rsx! {
        NavHeader { current: NavLocation::Blog }

        main { class: "blog-page", {content} }

        footer { class: "site-footer",
            "\u{00A9} The Digibazzar. All rights reserved."
        }
    }
}

/// Card grid with the load-more control
#[component]
fn BlogListing() -> Element {
    let mut session = use_blog_session();
    let listing = session.read().listing();

    let open_post = move |index: usize| {
        let result = session.write().select(index);
        match result {
            Ok(scroll) => scroll_to(scroll),
            Err(e) => tracing::warn!(error = %e, "Could not open post"),
        }
    };

    rsx! {
        div { class: "blog-intro",
            h1 { "Our Blog" }
            p { "Insights, strategies and trends from the Digibazzar team." }
        }

        div { class: "blog-grid",
            for card in listing.cards.iter().cloned() {
                BlogCardView {
                    key: "{card.index}",
                    card,
                    on_open: open_post,
                }
            }
        }

        if listing.more_available {
            Button {
                variant: ButtonVariant::LoadMore,
                onclick: move |_| {
                    session.write().load_more();
                },
                "Load More Articles"
            }
        } else if listing.total > 0 {
            p { class: "blog-footer", "You've reached the end of our articles." }
        }
    }
}

/// Full article for the selected post
#[component]
fn SinglePost(detail: DetailView) -> Element {
    let mut session = use_blog_session();
    let markdown = detail.article.to_markdown();

    let close = move |_: ()| {
        let scroll = session.write().close();
        scroll_to(scroll);
    };

    rsx! {
        article { class: "single-post",
            CloseButton { onclick: close, label: "Back to all articles" }

            div { class: "post-hero",
                img { src: "{detail.hero_image}", alt: "{detail.title}" }
            }

            header { class: "post-header",
                CategoryBadge {
                    label: detail.category.clone(),
                    accent: detail.accent,
                }
                h1 { "{detail.title}" }
                div { class: "post-meta",
                    span { "{detail.date}" }
                    span { "By The Digibazzar Team" }
                }
            }

            ArticleBody { content: markdown }

            CommentSection { key: "{detail.index}", post_index: detail.index }

            div { class: "back-link",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: close,
                    "\u{2190} Back to all articles"
                }
            }
        }
    }
}
