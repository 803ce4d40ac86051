//! Layout and touch-target policy tables
//!
//! Named helpers that compose a scale function with a domain floor. All
//! floors and ceilings live in [`policy`] so no call site re-declares its
//! own constants.

use crate::responsive::{Breakpoint, ResponsiveValue, Scaler};
use serde::{Deserialize, Serialize};

// =============================================================================
// Policy Constants
// =============================================================================

/// Centralized floor/ceiling constants for every policy table
pub mod policy {
    /// Minimum accessible touch target (44px, iOS guideline)
    ///
    /// A hard floor, never scaled down.
    pub const MIN_TOUCH_TARGET: f32 = 44.0;
    /// Comfortable touch target (48px, Material guideline)
    pub const COMFORTABLE_TOUCH_TARGET: f32 = 48.0;
    /// Smallest legible font size
    pub const MIN_FONT_SIZE: f32 = 11.0;
    /// Default blend factor for moderate scaling
    pub const MODERATE_FACTOR: f32 = 0.5;
    /// Lower bound of the user font-scale preference
    pub const FONT_SCALE_MIN: f32 = 0.8;
    /// Upper bound of the user font-scale preference
    pub const FONT_SCALE_MAX: f32 = 1.4;
}

// =============================================================================
// Button Sizes
// =============================================================================

/// Button size classes used by the touch table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Compact buttons (40px base)
    Small,
    /// Standard buttons (48px base)
    #[default]
    Medium,
    /// Prominent buttons (56px base)
    Large,
}

impl ButtonSize {
    /// Design-reference edge length for this size class
    pub fn base(self) -> f32 {
        match self {
            ButtonSize::Small => 40.0,
            ButtonSize::Medium => 48.0,
            ButtonSize::Large => 56.0,
        }
    }
}

// =============================================================================
// Layout Table
// =============================================================================

/// Spacing and radius helpers for the current display
///
/// Cheap to construct; consumers grab one from the context per render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTable {
    scaler: Scaler,
    breakpoint: Breakpoint,
}

impl LayoutTable {
    /// Create a table for the given scaler and breakpoint
    pub fn new(scaler: Scaler, breakpoint: Breakpoint) -> Self {
        Self { scaler, breakpoint }
    }

    /// Device-adjusted padding for a design-reference level
    pub fn padding(&self, level: f32) -> f32 {
        self.moderate_floor(level)
    }

    /// Device-adjusted margin for a design-reference level
    pub fn margin(&self, level: f32) -> f32 {
        self.moderate_floor(level)
    }

    /// Device-adjusted corner radius for a design-reference level
    pub fn border_radius(&self, level: f32) -> f32 {
        self.moderate_floor(level)
    }

    /// Horizontal screen gutter for the current breakpoint
    pub fn content_padding(&self) -> f32 {
        ResponsiveValue::new(16.0)
            .xs(12.0)
            .lg(24.0)
            .tablet(32.0)
            .resolve_copied(self.breakpoint)
    }

    fn moderate_floor(&self, level: f32) -> f32 {
        self.scaler.moderate_scale(level).max(0.0)
    }
}

// =============================================================================
// Touch Table
// =============================================================================

/// Touch-target sizing with the accessibility floor applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchTable {
    scaler: Scaler,
}

impl TouchTable {
    /// Create a table for the given scaler
    pub fn new(scaler: Scaler) -> Self {
        Self { scaler }
    }

    /// Edge length for a button size class
    ///
    /// Scaled, then floored at [`policy::MIN_TOUCH_TARGET`] regardless of
    /// how compressed the display is.
    pub fn button_size(&self, size: ButtonSize) -> f32 {
        self.scaler
            .moderate_scale(size.base())
            .max(policy::MIN_TOUCH_TARGET)
    }

    /// Extra margin per side needed to bring a visual size up to the floor
    ///
    /// Zero when the visual size already meets [`policy::MIN_TOUCH_TARGET`].
    pub fn hit_slop(&self, visual_size: f32) -> f32 {
        ((policy::MIN_TOUCH_TARGET - visual_size) / 2.0).max(0.0)
    }
}
