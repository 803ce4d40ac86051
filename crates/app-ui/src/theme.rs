//! Color themes for Wellspring
//!
//! Two variants are supported, light and dark, each carrying the same
//! closed set of semantic color tokens. The token set is a struct, so a
//! variant physically cannot omit a token the other variant has; theme
//! constructors are pure functions, so toggling back and forth always
//! reproduces identical values.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeVariant};
//!
//! let theme = get_theme(ThemeVariant::Dark);
//! assert!(theme.is_dark());
//! let background = &theme.colors.background;
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Utilities
// =============================================================================

/// A color represented as an RGB(A) hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Append an alpha channel to an opaque hex color
///
/// The screens build overlay tints this way (a brand color at 8-20%
/// opacity behind icons and pressed states). Alpha is clamped to `[0, 1]`;
/// an unparseable input is returned unchanged.
pub fn with_alpha(hex: &str, alpha: f32) -> Color {
    match parse_hex_color(hex) {
        Some((r, g, b)) => {
            let byte = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("{}{:02X}", rgb_to_hex(r, g, b), byte)
        }
        None => hex.to_string(),
    }
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Wellspring brand colors
pub mod brand {
    /// Primary brand color (spring teal)
    pub const PRIMARY: &str = "#0E9F8A";
    /// Accent color (warm amber)
    pub const ACCENT: &str = "#F4A259";
    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
    /// Pure black
    pub const BLACK: &str = "#000000";
}

// =============================================================================
// Theme Variant
// =============================================================================

/// Theme variant enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeVariant {
    /// The opposite variant
    pub fn toggled(self) -> Self {
        match self {
            ThemeVariant::Light => ThemeVariant::Dark,
            ThemeVariant::Dark => ThemeVariant::Light,
        }
    }

    /// The color scheme name reported to the host
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeVariant::Light => write!(f, "Light"),
            ThemeVariant::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeVariant::Light),
            "dark" => Ok(ThemeVariant::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

// =============================================================================
// Color Tokens
// =============================================================================

/// The closed set of semantic color tokens
///
/// Every variant fills every field; a new token added here forces both
/// theme constructors to supply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    /// Primary brand/action color
    pub primary: Color,
    /// Accent highlight color
    pub accent: Color,
    /// Main screen background
    pub background: Color,
    /// Inputs, chips, list rows
    pub surface: Color,
    /// Elevated cards
    pub card: Color,
    /// Primary text
    pub text: Color,
    /// Secondary/muted text
    pub text_secondary: Color,
    /// Hairline borders and dividers
    pub border: Color,
    /// Drop shadow color
    pub shadow: Color,
    /// Error/destructive state
    pub error: Color,
    /// Success state
    pub success: Color,
    /// Warning state
    pub warning: Color,
    /// Informational state
    pub info: Color,
}

impl ColorTokens {
    /// Token names, in field order
    pub const NAMES: [&'static str; 13] = [
        "primary",
        "accent",
        "background",
        "surface",
        "card",
        "text",
        "text_secondary",
        "border",
        "shadow",
        "error",
        "success",
        "warning",
        "info",
    ];

    /// Look up a token by name (for tooling and theme inspectors)
    pub fn get(&self, name: &str) -> Option<&Color> {
        match name {
            "primary" => Some(&self.primary),
            "accent" => Some(&self.accent),
            "background" => Some(&self.background),
            "surface" => Some(&self.surface),
            "card" => Some(&self.card),
            "text" => Some(&self.text),
            "text_secondary" => Some(&self.text_secondary),
            "border" => Some(&self.border),
            "shadow" => Some(&self.shadow),
            "error" => Some(&self.error),
            "success" => Some(&self.success),
            "warning" => Some(&self.warning),
            "info" => Some(&self.info),
            _ => None,
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// A complete theme: variant plus its token values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Which variant this is
    pub variant: ThemeVariant,
    /// Semantic color tokens
    pub colors: ColorTokens,
}

impl Theme {
    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.variant, ThemeVariant::Dark)
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        variant: ThemeVariant::Light,
        colors: ColorTokens {
            primary: brand::PRIMARY.to_string(),
            accent: brand::ACCENT.to_string(),
            background: "#F7FAF9".to_string(),
            surface: "#FFFFFF".to_string(),
            card: "#EEF4F2".to_string(),
            text: "#15211E".to_string(),
            text_secondary: "#5B6B67".to_string(),
            border: "#DCE5E2".to_string(),
            shadow: brand::BLACK.to_string(),
            error: "#E5484D".to_string(),
            success: "#30A46C".to_string(),
            warning: "#F5A623".to_string(),
            info: "#3B82F6".to_string(),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        variant: ThemeVariant::Dark,
        colors: ColorTokens {
            // Brighter teal so the brand reads against near-black
            primary: "#2BC5AC".to_string(),
            accent: "#F7B374".to_string(),
            background: "#0E1513".to_string(),
            surface: "#18201E".to_string(),
            card: "#202A27".to_string(),
            text: "#F2F7F5".to_string(),
            text_secondary: "#93A5A0".to_string(),
            border: "#2A3835".to_string(),
            shadow: brand::BLACK.to_string(),
            error: "#FF6369".to_string(),
            success: "#3DD68C".to_string(),
            warning: "#FFB224".to_string(),
            info: "#60A5FA".to_string(),
        },
    }
}

/// Get a theme by variant
pub fn get_theme(variant: ThemeVariant) -> Theme {
    match variant {
        ThemeVariant::Light => light_theme(),
        ThemeVariant::Dark => dark_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#0E9F8A"), Some((14, 159, 138)));
        assert_eq!(parse_hex_color("0E9F8A"), Some((14, 159, 138)));
        assert_eq!(parse_hex_color("#FF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#FFFFFF");
        assert_eq!(rgb_to_hex(14, 159, 138), "#0E9F8A");
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#0E9F8A", 1.0), "#0E9F8AFF");
        assert_eq!(with_alpha("#0E9F8A", 0.0), "#0E9F8A00");
        // 8% tint used behind icon badges
        assert_eq!(with_alpha("#0E9F8A", 0.08), "#0E9F8A14");
    }

    #[test]
    fn test_with_alpha_clamps_and_passes_through() {
        assert_eq!(with_alpha("#0E9F8A", 2.0), "#0E9F8AFF");
        assert_eq!(with_alpha("#0E9F8A", -1.0), "#0E9F8A00");
        assert_eq!(with_alpha("not-a-color", 0.5), "not-a-color");
    }

    // ==========================================================================
    // Theme Variant Tests
    // ==========================================================================

    #[test]
    fn test_variant_display_from_str() {
        assert_eq!(ThemeVariant::Light.to_string(), "Light");
        assert_eq!("dark".parse::<ThemeVariant>().unwrap(), ThemeVariant::Dark);
        assert_eq!("LIGHT".parse::<ThemeVariant>().unwrap(), ThemeVariant::Light);
        assert!("dim".parse::<ThemeVariant>().is_err());
    }

    #[test]
    fn test_variant_toggle_round_trip() {
        assert_eq!(ThemeVariant::Light.toggled(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::Light.toggled().toggled(), ThemeVariant::Light);
    }

    #[test]
    fn test_variant_color_scheme() {
        assert_eq!(ThemeVariant::Light.color_scheme(), "light");
        assert_eq!(ThemeVariant::Dark.color_scheme(), "dark");
    }

    // ==========================================================================
    // Theme Tests
    // ==========================================================================

    #[test]
    fn test_light_theme_basics() {
        let theme = light_theme();
        assert_eq!(theme.variant, ThemeVariant::Light);
        assert!(!theme.is_dark());
        assert_eq!(theme.colors.primary, "#0E9F8A");
    }

    #[test]
    fn test_dark_theme_basics() {
        let theme = dark_theme();
        assert!(theme.is_dark());
        assert_eq!(theme.colors.background, "#0E1513");
    }

    #[test]
    fn test_toggle_round_trip_is_idempotent() {
        let original = get_theme(ThemeVariant::Light);
        let toggled_back = get_theme(original.variant.toggled().toggled());
        assert_eq!(toggled_back, original);
    }

    #[test]
    fn test_every_token_resolves_in_both_variants() {
        for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
            let theme = get_theme(variant);
            for name in ColorTokens::NAMES {
                let color = theme
                    .colors
                    .get(name)
                    .unwrap_or_else(|| panic!("{} missing in {:?}", name, variant));
                assert!(
                    parse_hex_color(color).is_some(),
                    "invalid {} in {:?}: {}",
                    name,
                    variant,
                    color
                );
            }
        }
    }

    #[test]
    fn test_token_lookup_rejects_unknown_names() {
        assert!(light_theme().colors.get("sparkle").is_none());
    }

    #[test]
    fn test_text_background_contrast() {
        for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
            let theme = get_theme(variant);
            let bg = parse_hex_color(&theme.colors.background).unwrap();
            let text = parse_hex_color(&theme.colors.text).unwrap();

            let bg_lum = (bg.0 as u32 + bg.1 as u32 + bg.2 as u32) / 3;
            let text_lum = (text.0 as u32 + text.1 as u32 + text.2 as u32) / 3;
            let diff = bg_lum.abs_diff(text_lum);

            assert!(
                diff > 100,
                "{:?} theme has insufficient text contrast: diff={}",
                variant,
                diff
            );
        }
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_variant_serialization() {
        let json = serde_json::to_string(&ThemeVariant::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let deserialized: ThemeVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ThemeVariant::Dark);
    }

    #[test]
    fn test_theme_serialization_round_trip() {
        let theme = dark_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let deserialized: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, theme);
    }
}
