//! Core types for The Digibazzar blog

use serde::{Deserialize, Serialize};

/// Title shown for a post without one
pub const UNTITLED_POST: &str = "Untitled post";

/// Category shown for a post without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Accent color used to tint a post's category badge
///
/// Posts carry the accent as a free-form tag; anything outside this set is
/// rendered with [`AccentColor::FALLBACK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Orange,
    Blue,
    Purple,
    Green,
    Red,
}

impl AccentColor {
    /// Accent used for unrecognized color tags
    pub const FALLBACK: AccentColor = AccentColor::Red;

    /// All accents in palette order
    pub fn all() -> &'static [AccentColor] {
        &[
            AccentColor::Orange,
            AccentColor::Blue,
            AccentColor::Purple,
            AccentColor::Green,
            AccentColor::Red,
        ]
    }

    /// Parse a color tag. Only the exact lowercase names match.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|accent| accent.as_str() == tag)
    }

    /// Lowercase tag name ("orange", "blue", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Orange => "orange",
            AccentColor::Blue => "blue",
            AccentColor::Purple => "purple",
            AccentColor::Green => "green",
            AccentColor::Red => "red",
        }
    }

    /// CSS custom property holding the brand shade
    pub fn css_var(&self) -> String {
        format!("var(--brand-{})", self.as_str())
    }

    /// Brand shade as a hex color
    pub fn hex(&self) -> &'static str {
        match self {
            AccentColor::Orange => "#ff7f50",
            AccentColor::Blue => "#1877f2",
            AccentColor::Purple => "#5d2e8e",
            AccentColor::Green => "#2e9e5b",
            AccentColor::Red => "#e0245e",
        }
    }
}

impl std::fmt::Display for AccentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single blog post as stored in the catalog
///
/// Every field defaults to an empty string when missing from JSON so that an
/// incomplete record still loads; the listing renderer decides how to present
/// the gaps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRecord {
    /// Post headline
    pub title: String,
    /// Topic label ("SEO", "Social Media", ...)
    pub category: String,
    /// Display-formatted date, never parsed
    pub date: String,
    /// Raw accent tag, see [`AccentColor::from_tag`]
    pub color: String,
    /// Remote image URL (listing resolution)
    pub image: String,
    /// Short teaser text
    pub desc: String,
}

impl PostRecord {
    /// Create a post record from its six display fields
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
        color: impl Into<String>,
        image: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            date: date.into(),
            color: color.into(),
            image: image.into(),
            desc: desc.into(),
        }
    }

    /// Parsed accent, or `None` when the tag is not in the palette
    pub fn accent_tag(&self) -> Option<AccentColor> {
        AccentColor::from_tag(&self.color)
    }

    /// Accent to render with, falling back for unknown tags
    pub fn accent(&self) -> AccentColor {
        self.accent_tag().unwrap_or(AccentColor::FALLBACK)
    }

    /// Title to display; blank titles become [`UNTITLED_POST`]
    pub fn display_title(&self) -> &str {
        or_default(&self.title, UNTITLED_POST)
    }

    /// Category to display; blank categories become [`DEFAULT_CATEGORY`]
    pub fn display_category(&self) -> &str {
        or_default(&self.category, DEFAULT_CATEGORY)
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}
