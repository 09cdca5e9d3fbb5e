//! Comment Section Component
//!
//! Name, email and message fields under an open article. Posting disables
//! the button, waits out the configured delay, then shows the
//! acknowledgement and clears the fields.

use dioxus::prelude::*;
use digibazzar_core::comments::ACKNOWLEDGEMENT;
use digibazzar_core::{CommentDraft, CommentForm};
use digibazzar_ui::{Button, ButtonVariant};

use crate::context::blog_config;

#[component]
pub fn CommentSection(
    /// Catalog index of the article being commented on
    post_index: usize,
) -> Element {
    let mut form = use_signal(CommentForm::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut notice: Signal<Option<String>> = use_signal(|| None);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let delay = blog_config().comment_delay();

    let on_submit = move |_: ()| {
        let draft = CommentDraft::new(name(), email(), message());
        if let Err(e) = form.write().submit(draft, post_index) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        notice.set(None);

        spawn(async move {
            tokio::time::sleep(delay).await;
            match form.write().complete() {
                Ok(comment) => {
                    tracing::info!(id = %comment.id, post_index, "Comment acknowledged");
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    notice.set(Some(ACKNOWLEDGEMENT.to_string()));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Comment completion failed");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let posting = form.read().is_posting();
    let label = form.read().button_label();

    rsx! {
        section { class: "comments-section",
            h3 { "Leave a Comment" }

            if let Some(text) = notice() {
                p { class: "comment-notice", "{text}" }
            }

            div { class: "comment-form",
                div { class: "form-row",
                    input {
                        class: "input-field",
                        r#type: "text",
                        placeholder: "Your name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    input {
                        class: "input-field",
                        r#type: "email",
                        placeholder: "Your email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                textarea {
                    class: "input-field",
                    placeholder: "Share your thoughts...",
                    value: "{message}",
                    oninput: move |e| message.set(e.value()),
                }

                if let Some(err) = error() {
                    p { class: "comment-error", "{err}" }
                }

                div {
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: posting,
                        onclick: on_submit,
                        "{label}"
                    }
                }
            }
        }
    }
}
