//! Page components for The Digibazzar.

mod blog;
mod home;

pub use blog::Blog;
pub use home::Home;
