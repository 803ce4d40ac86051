//! Typography system for Wellspring
//!
//! Semantic text roles resolve to concrete [`TextStyle`]s through a
//! [`TypeScale`] built from the current display. Role order is the size
//! order: caption up through h1, and resolved sizes stay monotonic in that
//! order at every scale factor.

use crate::layout::policy;
use crate::responsive::Scaler;
use serde::{Deserialize, Serialize};

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

/// Line height multipliers
pub mod line_height {
    /// Tight (1.25) — headings
    pub const TIGHT: f32 = 1.25;
    /// Normal (1.5) — body copy
    pub const NORMAL: f32 = 1.5;
    /// Relaxed (1.625) — long-form reading
    pub const RELAXED: f32 = 1.625;
}

/// Letter spacing (tracking) in em units
pub mod tracking {
    /// Default letter spacing
    pub const DEFAULT: f32 = 0.0;
    /// Tight letter spacing (-0.025em) — large headings
    pub const TIGHT: f32 = -0.025;
}

// =============================================================================
// Text Roles
// =============================================================================

/// Semantic text roles, declared smallest to largest
///
/// The derive order matters: `Ord` on this enum is the typographic size
/// order, and resolved sizes are monotonic along it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum TextRole {
    /// Timestamps, counters, helper text (12px base)
    Caption,
    /// Secondary copy (14px base)
    BodySmall,
    /// Default copy (16px base)
    #[default]
    Body,
    /// Emphasized copy, same size as body with medium weight (16px base)
    BodyMedium,
    /// Section headings (20px base)
    H4,
    /// Card titles (24px base)
    H3,
    /// Screen subtitles (28px base)
    H2,
    /// Screen titles (32px base)
    H1,
}

impl TextRole {
    /// All roles, ascending by size
    pub const ALL: [TextRole; 8] = [
        TextRole::Caption,
        TextRole::BodySmall,
        TextRole::Body,
        TextRole::BodyMedium,
        TextRole::H4,
        TextRole::H3,
        TextRole::H2,
        TextRole::H1,
    ];

    /// Design-reference font size for this role
    pub fn base_size(self) -> f32 {
        match self {
            TextRole::Caption => 12.0,
            TextRole::BodySmall => 14.0,
            TextRole::Body | TextRole::BodyMedium => 16.0,
            TextRole::H4 => 20.0,
            TextRole::H3 => 24.0,
            TextRole::H2 => 28.0,
            TextRole::H1 => 32.0,
        }
    }

    /// Font weight for this role
    pub fn weight(self) -> u16 {
        match self {
            TextRole::Caption | TextRole::BodySmall | TextRole::Body => font_weight::NORMAL,
            TextRole::BodyMedium => font_weight::MEDIUM,
            TextRole::H4 | TextRole::H3 => font_weight::SEMI_BOLD,
            TextRole::H2 | TextRole::H1 => font_weight::BOLD,
        }
    }

    /// Whether this role is a heading
    pub fn is_heading(self) -> bool {
        matches!(self, TextRole::H4 | TextRole::H3 | TextRole::H2 | TextRole::H1)
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// A resolved text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in device-independent pixels
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: u16,
    /// Line height multiplier
    pub line_height: f32,
    /// Letter spacing in em
    pub letter_spacing: f32,
}

impl TextStyle {
    /// Create a style with normal line height and default tracking
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: line_height::NORMAL,
            letter_spacing: tracking::DEFAULT,
        }
    }

    /// Set the line height multiplier
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    /// Set the letter spacing
    pub fn with_letter_spacing(mut self, ls: f32) -> Self {
        self.letter_spacing = ls;
        self
    }

    /// The line height in device-independent pixels
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

// =============================================================================
// Type Scale
// =============================================================================

/// Device- and preference-aware typography resolver
///
/// Combines the display scaler with the user's font-scale preference
/// (clamped to the policy bounds) and floors every resolved size at
/// [`policy::MIN_FONT_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    scaler: Scaler,
    font_scale: f32,
}

impl TypeScale {
    /// Create a type scale with the default font-scale preference
    pub fn new(scaler: Scaler) -> Self {
        Self::with_font_scale(scaler, 1.0)
    }

    /// Create a type scale with a user font-scale preference
    pub fn with_font_scale(scaler: Scaler, font_scale: f32) -> Self {
        Self {
            scaler,
            font_scale: font_scale.clamp(policy::FONT_SCALE_MIN, policy::FONT_SCALE_MAX),
        }
    }

    /// The clamped user font-scale preference
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    /// Resolve a raw design-reference size
    pub fn size(&self, level: f32) -> f32 {
        (self.scaler.moderate_scale(level) * self.font_scale).max(policy::MIN_FONT_SIZE)
    }

    /// Resolve the font size for a semantic role
    pub fn font_size(&self, role: TextRole) -> f32 {
        self.size(role.base_size())
    }

    /// Resolve the complete style for a semantic role
    pub fn style(&self, role: TextRole) -> TextStyle {
        let style = TextStyle::new(self.font_size(role), role.weight());
        if role.is_heading() {
            style
                .with_line_height(line_height::TIGHT)
                .with_letter_spacing(tracking::TIGHT)
        } else {
            style
        }
    }
}
