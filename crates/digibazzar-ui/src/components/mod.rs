//! Reusable UI components
//!
//! Class names match the stylesheet shipped by the desktop shell.

mod button;
mod category_badge;

pub use button::*;
pub use category_badge::*;
