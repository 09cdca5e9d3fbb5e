//! The Digibazzar UI Components
//!
//! Dioxus building blocks shared by the site pages.
//!
//! ## Design Language
//!
//! A light agency look with two brand colors:
//! - **Purple (#5d2e8e)**: headings, primary actions
//! - **Orange (#ff7f50)**: highlights, hover states
//!
//! Category badges are tinted with the post's accent color through the
//! `--brand-<accent>` CSS custom properties defined by the site theme.

pub mod components;

pub use components::*;
