//! UI Components for The Digibazzar.

mod article_body;
mod blog_card;
mod comment_form;
mod nav_header;

pub use article_body::ArticleBody;
pub use blog_card::BlogCardView;
pub use comment_form::CommentSection;
pub use nav_header::{NavHeader, NavLocation};
