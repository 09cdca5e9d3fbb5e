//! Brand color constants.
//!
//! Accent shades come from [`AccentColor::hex`] so badges and the
//! palette never disagree.

use digibazzar_core::AccentColor;

// === BRAND ===
pub const BRAND_PURPLE: &str = "#5d2e8e";
pub const BRAND_PURPLE_DARK: &str = "#3f1d63";
pub const BRAND_ORANGE: &str = "#ff7f50";

// === TEXT ===
pub const TEXT_DARK: &str = "#1f1a24";
pub const TEXT_MUTED: &str = "#6b6475";

// === SURFACES ===
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_ALT: &str = "#f7f4fb";

/// `:root` block declaring every brand variable.
///
/// Accent variables are named `--brand-<tag>`, matching
/// [`AccentColor::css_var`].
pub fn brand_palette_css() -> String {
    let mut css = String::from(":root {\n");
    for accent in AccentColor::all() {
        css.push_str(&format!("  --brand-{}: {};\n", accent.as_str(), accent.hex()));
    }
    css.push_str(&format!("  --brand-purple-dark: {};\n", BRAND_PURPLE_DARK));
    css.push_str(&format!("  --brand-primary: {};\n", BRAND_PURPLE));
    css.push_str(&format!("  --brand-highlight: {};\n", BRAND_ORANGE));
    css.push_str(&format!("  --text-dark: {};\n", TEXT_DARK));
    css.push_str(&format!("  --text-muted: {};\n", TEXT_MUTED));
    css.push_str(&format!("  --surface: {};\n", SURFACE));
    css.push_str(&format!("  --surface-alt: {};\n", SURFACE_ALT));
    css.push('}');
    css
}
