//! Category Badge Component
//!
//! Small pill naming a post's category, tinted with its accent color.

use dioxus::prelude::*;
use digibazzar_core::AccentColor;

/// Inline style for a badge with the given accent
pub fn badge_style(accent: AccentColor) -> String {
    format!("background-color: {}", accent.css_var())
}

/// Properties for the CategoryBadge component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryBadgeProps {
    /// Category label ("SEO", "Design", ...)
    pub label: String,
    /// Accent the badge is tinted with
    pub accent: AccentColor,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Accent-tinted category label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryBadge {
///         label: card.category.clone(),
///         accent: card.accent,
///     }
/// }
/// ```
#[component]
pub fn CategoryBadge(props: CategoryBadgeProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("blog-category {}", extra),
        _ => "blog-category".to_string(),
    };
    let style = badge_style(props.accent);

    rsx! {
        span {
            class: "{class}",
            style: "{style}",
            "data-accent": "{props.accent}",
            "{props.label}"
        }
    }
}
