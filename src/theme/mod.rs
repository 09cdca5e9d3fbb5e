//! Visual theme for The Digibazzar.

mod colors;
mod styles;

pub use colors::brand_palette_css;
pub use styles::GLOBAL_STYLES;
