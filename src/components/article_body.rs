//! Article body rendered from synthesized Markdown.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert article Markdown to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Render an article's Markdown body.
#[component]
pub fn ArticleBody(
    /// Markdown produced by `Article::to_markdown`
    content: ReadOnlySignal<String>,
) -> Element {
    let html_content = use_memo(move || markdown_to_html(&content()));

    rsx! {
        div {
            class: "article-body",
            dangerous_inner_html: "{html_content()}",
        }
    }
}
