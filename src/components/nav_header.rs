//! Navigation Header Component
//!
//! Horizontal header with the agency name and links to Home and Blog.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the site
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Blog,
}

impl NavLocation {
    /// All locations, in header order
    pub const ALL: [NavLocation; 2] = [NavLocation::Home, NavLocation::Blog];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Blog => "Blog",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Blog => Route::Blog {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the site
    pub current: NavLocation,
}

/// Navigation Header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                Link { to: Route::Home {}, class: "brand-title",
                    "The Digi"
                    span { "bazzar" }
                }

                nav { class: "nav-links",
                    for location in NavLocation::ALL {
                        Link {
                            to: location.route(),
                            class: if location == props.current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }
            }
        }
    }
}
