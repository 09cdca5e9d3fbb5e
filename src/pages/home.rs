//! Home page - the agency landing view.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};

/// Services shown on the home page: (category, blurb)
const SERVICES: [(&str, &str); 6] = [
    (
        "SEO",
        "Rank higher with technical audits, local SEO and content that search engines trust.",
    ),
    (
        "Social Media",
        "Grow an engaged audience with platform-native content and community management.",
    ),
    (
        "PPC Ads",
        "Google and Meta campaigns tuned for return on ad spend, not vanity clicks.",
    ),
    (
        "Web Dev",
        "Fast, accessible websites built to convert visitors into customers.",
    ),
    (
        "Design",
        "Brand identities and interfaces that make people stop scrolling.",
    ),
    (
        "Content",
        "Stories, copy and video that carry your brand's voice everywhere.",
    ),
];

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        NavHeader { current: NavLocation::Home }

        main {
            section { class: "hero",
                h1 { "Grow Your Brand with The Digibazzar" }
                p {
                    "A full-service digital marketing agency helping businesses win online "
                    "with SEO, social media, paid ads, web development and design."
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| {
                        navigator.push(Route::Blog {});
                    },
                    "Read Our Blog"
                }
            }

            section { class: "services",
                h2 { class: "section-title", "What We Do" }
                div { class: "service-grid",
                    for (category, blurb) in SERVICES {
                        div { class: "service-card",
                            h3 { "{category}" }
                            p { "{blurb}" }
                        }
                    }
                }
            }
        }

        footer { class: "site-footer",
            "\u{00A9} The Digibazzar. All rights reserved."
        }
    }
}
