//! Button Components
//!
//! Button styles used across the site:
//! - Primary: filled purple call-to-action
//! - LoadMore: outlined button under the blog grid
//! - ReadMore: inline text link with an arrow
//! - Ghost: subtle secondary action

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled call-to-action
    #[default]
    Primary,
    /// "Load more" under the blog grid
    LoadMore,
    /// Inline "Read More" link on a card
    ReadMore,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::LoadMore => "btn-load-more",
            ButtonVariant::ReadMore => "read-more",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::LoadMore,
///         onclick: move |_| session.write().load_more(),
///         "Load More Articles"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.variant.class(),
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(
    /// Click handler
    onclick: EventHandler<()>,
    /// Accessible label for screen readers
    #[props(default = "Close".to_string())]
    label: String,
) -> Element {
    rsx! {
        button {
            class: "icon-btn close-btn",
            "aria-label": "{label}",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}
