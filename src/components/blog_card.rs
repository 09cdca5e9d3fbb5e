//! Blog Card Component
//!
//! One card in the listing grid. The card carries the catalog index it was
//! rendered from and hands it back through `on_open`.

use dioxus::prelude::*;
use digibazzar_core::BlogCard;
use digibazzar_ui::{Button, ButtonVariant, CategoryBadge};

#[component]
pub fn BlogCardView(
    /// Card produced by the listing renderer
    card: BlogCard,
    /// Called with the card's catalog index
    on_open: EventHandler<usize>,
) -> Element {
    let index = card.index;

    rsx! {
        article { class: "blog-card", "data-index": "{index}",
            div { class: "blog-image",
                if let Some(ref image) = card.image {
                    img { src: "{image}", alt: "{card.title}", loading: "lazy" }
                }
                CategoryBadge {
                    label: card.category.clone(),
                    accent: card.accent,
                }
            }

            div { class: "blog-content",
                if let Some(ref date) = card.date {
                    span { class: "blog-date", "{date}" }
                }
                h3 { "{card.title}" }
                if let Some(ref desc) = card.desc {
                    p { "{desc}" }
                }
                Button {
                    variant: ButtonVariant::ReadMore,
                    onclick: move |_| on_open.call(index),
                    "Read More \u{2192}"
                }
            }
        }
    }
}
