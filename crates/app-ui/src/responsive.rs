//! Responsive scaling primitives
//!
//! Three pieces live here:
//!
//! - [`Scaler`] — pure numeric transforms mapping design-reference dimensions
//!   to device-adjusted ones (`scale`, `vertical_scale`, `moderate_scale`)
//! - [`Breakpoint`] — the closed device-size classification, one class per
//!   width
//! - [`ResponsiveValue`] — a per-breakpoint value table with a mandatory
//!   default
//!
//! Everything is a pure function of the display snapshot; nothing here holds
//! mutable state. Rebuild the [`Scaler`] and re-classify on every display
//! event so rotation never leaves a stale classification behind.

use crate::error::{ConfigError, Result};
use crate::layout::policy;
use app_platform::DisplayMetrics;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Reference Design Size
// =============================================================================

/// The design-reference dimensions all scaling is measured against
///
/// The default matches the 375x812 artboard the screens were designed on.
/// Hosts with a different design base configure their own pair; both
/// dimensions must be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSize {
    /// Reference width in device-independent pixels
    pub width: f32,
    /// Reference height in device-independent pixels
    pub height: f32,
}

impl ReferenceSize {
    /// The default design artboard (375x812)
    pub const DEFAULT: Self = Self {
        width: 375.0,
        height: 812.0,
    };

    /// Create a validated reference size
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::InvalidReference {
                name: "width",
                value: width,
            });
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(ConfigError::InvalidReference {
                name: "height",
                value: height,
            });
        }
        Ok(Self { width, height })
    }
}

impl Default for ReferenceSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Breakpoints
// =============================================================================

/// Breakpoint width thresholds in device-independent pixels
pub mod thresholds {
    /// Small phones (360px)
    pub const SM: f32 = 360.0;
    /// Standard phones (414px)
    pub const MD: f32 = 414.0;
    /// Large phones and small tablets (600px)
    pub const LG: f32 = 600.0;
    /// Tablets (768px)
    pub const TABLET: f32 = 768.0;
}

/// Discrete device-size classification
///
/// Exactly one class holds for a given width. Classification is the highest
/// threshold not exceeding the width; anything below the smallest threshold
/// is `Xs`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Compact phones (< 360px)
    Xs,
    /// Small phones (>= 360px)
    Sm,
    /// Standard phones (>= 414px)
    #[default]
    Md,
    /// Large phones (>= 600px)
    Lg,
    /// Tablets (>= 768px)
    Tablet,
}

impl Breakpoint {
    /// All breakpoints, ascending
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Tablet,
    ];

    /// Classify a logical width into its breakpoint
    pub fn classify(width: f32) -> Self {
        if width >= thresholds::TABLET {
            Breakpoint::Tablet
        } else if width >= thresholds::LG {
            Breakpoint::Lg
        } else if width >= thresholds::MD {
            Breakpoint::Md
        } else if width >= thresholds::SM {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }

    /// The smallest width that maps to this breakpoint
    pub fn min_width(self) -> f32 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => thresholds::SM,
            Breakpoint::Md => thresholds::MD,
            Breakpoint::Lg => thresholds::LG,
            Breakpoint::Tablet => thresholds::TABLET,
        }
    }

    /// Whether this breakpoint is the tablet class
    pub fn is_tablet(self) -> bool {
        matches!(self, Breakpoint::Tablet)
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Breakpoint::Xs => write!(f, "xs"),
            Breakpoint::Sm => write!(f, "sm"),
            Breakpoint::Md => write!(f, "md"),
            Breakpoint::Lg => write!(f, "lg"),
            Breakpoint::Tablet => write!(f, "tablet"),
        }
    }
}

impl std::str::FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xs" => Ok(Breakpoint::Xs),
            "sm" => Ok(Breakpoint::Sm),
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            "tablet" => Ok(Breakpoint::Tablet),
            _ => Err(format!("Unknown breakpoint: {}", s)),
        }
    }
}

// =============================================================================
// Scaler
// =============================================================================

/// Pure scale functions over a captured ratio pair
///
/// Ratios are computed once from a display snapshot; degenerate dimensions
/// clamp the ratio to 1.0 so no positive finite input ever produces a
/// negative or non-finite output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    horizontal: f32,
    vertical: f32,
}

impl Scaler {
    /// Build a scaler from a display snapshot and reference size
    pub fn new(metrics: &DisplayMetrics, reference: ReferenceSize) -> Self {
        Self {
            horizontal: ratio(metrics.width(), reference.width, "width"),
            vertical: ratio(metrics.height(), reference.height, "height"),
        }
    }

    /// A scaler that leaves every dimension unchanged
    pub fn identity() -> Self {
        Self {
            horizontal: 1.0,
            vertical: 1.0,
        }
    }

    /// Current-to-reference width ratio
    pub fn horizontal_ratio(&self) -> f32 {
        self.horizontal
    }

    /// Current-to-reference height ratio
    pub fn vertical_ratio(&self) -> f32 {
        self.vertical
    }

    /// Scale a design dimension by the width ratio
    pub fn scale(&self, n: f32) -> f32 {
        n * self.horizontal
    }

    /// Scale a design dimension by the height ratio
    pub fn vertical_scale(&self, n: f32) -> f32 {
        n * self.vertical
    }

    /// Blend between the unscaled value and `scale(n)` with the default factor
    pub fn moderate_scale(&self, n: f32) -> f32 {
        self.moderate_scale_by(n, policy::MODERATE_FACTOR)
    }

    /// Blend between the unscaled value and `scale(n)`
    ///
    /// A factor of 0.0 returns `n` unchanged; 1.0 returns `scale(n)`.
    /// Intermediate factors damp scaling extremes on very large or very
    /// small displays.
    pub fn moderate_scale_by(&self, n: f32, factor: f32) -> f32 {
        n + (self.scale(n) - n) * factor
    }
}

fn ratio(current: f32, reference: f32, axis: &'static str) -> f32 {
    if !current.is_finite() || current <= 0.0 || !reference.is_finite() || reference <= 0.0 {
        tracing::warn!(
            axis,
            current,
            reference,
            "degenerate display dimension, clamping scale ratio to 1.0"
        );
        1.0
    } else {
        current / reference
    }
}

// =============================================================================
// Responsive Values
// =============================================================================

/// A per-breakpoint value table with a mandatory default
///
/// Resolution is an exact match for the current breakpoint, falling back to
/// `default` when no override exists. The builder makes a default-less map
/// unrepresentable; the serde form rejects one at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveValue<T> {
    /// Fallback for breakpoints without an override
    pub default: T,
    /// Override for [`Breakpoint::Xs`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<T>,
    /// Override for [`Breakpoint::Sm`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    /// Override for [`Breakpoint::Md`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    /// Override for [`Breakpoint::Lg`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    /// Override for [`Breakpoint::Tablet`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet: Option<T>,
}


impl<T> ResponsiveValue<T> {
    /// Create a map holding only the mandatory default
    pub fn new(default: T) -> Self {
        Self {
            default,
            xs: None,
            sm: None,
            md: None,
            lg: None,
            tablet: None,
        }
    }

    /// Set the `xs` override
    pub fn xs(mut self, value: T) -> Self {
        self.xs = Some(value);
        self
    }

    /// Set the `sm` override
    pub fn sm(mut self, value: T) -> Self {
        self.sm = Some(value);
        self
    }

    /// Set the `md` override
    pub fn md(mut self, value: T) -> Self {
        self.md = Some(value);
        self
    }

    /// Set the `lg` override
    pub fn lg(mut self, value: T) -> Self {
        self.lg = Some(value);
        self
    }

    /// Set the `tablet` override
    pub fn tablet(mut self, value: T) -> Self {
        self.tablet = Some(value);
        self
    }

    /// Build a map from dynamic entries, failing fast without a default
    pub fn from_map(overrides: HashMap<Breakpoint, T>, default: Option<T>) -> Result<Self> {
        let mut value = Self::new(default.ok_or(ConfigError::MissingDefault)?);
        for (breakpoint, entry) in overrides {
            match breakpoint {
                Breakpoint::Xs => value.xs = Some(entry),
                Breakpoint::Sm => value.sm = Some(entry),
                Breakpoint::Md => value.md = Some(entry),
                Breakpoint::Lg => value.lg = Some(entry),
                Breakpoint::Tablet => value.tablet = Some(entry),
            }
        }
        Ok(value)
    }

    /// Resolve the value for a breakpoint
    pub fn resolve(&self, breakpoint: Breakpoint) -> &T {
        let slot = match breakpoint {
            Breakpoint::Xs => &self.xs,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Tablet => &self.tablet,
        };
        slot.as_ref().unwrap_or(&self.default)
    }
}

impl<T: Copy> ResponsiveValue<T> {
    /// Resolve by value for `Copy` payloads
    pub fn resolve_copied(&self, breakpoint: Breakpoint) -> T {
        *self.resolve(breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::{Platform, RawDisplayMetrics};

    fn metrics(width: f32, height: f32) -> DisplayMetrics {
        DisplayMetrics::from_raw(RawDisplayMetrics {
            width,
            height,
            pixel_density: 2.0,
            platform: Platform::Ios,
        })
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ==========================================================================
    // Reference Size Tests
    // ==========================================================================

    #[test]
    fn test_reference_size_default() {
        let reference = ReferenceSize::default();
        assert_eq!(reference.width, 375.0);
        assert_eq!(reference.height, 812.0);
    }

    #[test]
    fn test_reference_size_validation() {
        assert!(ReferenceSize::new(390.0, 844.0).is_ok());
        assert_eq!(
            ReferenceSize::new(0.0, 844.0),
            Err(ConfigError::InvalidReference {
                name: "width",
                value: 0.0
            })
        );
        assert!(ReferenceSize::new(390.0, -1.0).is_err());
        assert!(ReferenceSize::new(f32::NAN, 844.0).is_err());
    }

    // ==========================================================================
    // Breakpoint Tests
    // ==========================================================================

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Breakpoint::classify(0.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::classify(359.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::classify(360.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::classify(400.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::classify(414.0), Breakpoint::Md);
        assert_eq!(Breakpoint::classify(600.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::classify(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1024.0), Breakpoint::Tablet);
    }

    #[test]
    fn test_classify_below_smallest_threshold() {
        assert_eq!(Breakpoint::classify(-10.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::classify(f32::NAN), Breakpoint::Xs);
    }

    #[test]
    fn test_breakpoint_ordering() {
        assert!(Breakpoint::Xs < Breakpoint::Sm);
        assert!(Breakpoint::Sm < Breakpoint::Md);
        assert!(Breakpoint::Md < Breakpoint::Lg);
        assert!(Breakpoint::Lg < Breakpoint::Tablet);
    }

    #[test]
    fn test_breakpoint_min_width_round_trips_through_classify() {
        for breakpoint in Breakpoint::ALL {
            assert_eq!(Breakpoint::classify(breakpoint.min_width()), breakpoint);
        }
    }

    #[test]
    fn test_breakpoint_display_from_str() {
        for breakpoint in Breakpoint::ALL {
            let parsed: Breakpoint = breakpoint.to_string().parse().unwrap();
            assert_eq!(parsed, breakpoint);
        }
        assert!("huge".parse::<Breakpoint>().is_err());
    }

    // ==========================================================================
    // Scaler Tests
    // ==========================================================================

    #[test]
    fn test_scale_doubles_on_double_width() {
        let scaler = Scaler::new(&metrics(750.0, 812.0), ReferenceSize::default());
        assert!(approx_eq(scaler.scale(100.0), 200.0));
    }

    #[test]
    fn test_scale_is_exact_multiplication() {
        let scaler = Scaler::new(&metrics(414.0, 896.0), ReferenceSize::default());
        let ratio = 414.0 / 375.0;
        for n in [1.0_f32, 4.0, 13.0, 48.0, 100.0, 375.0] {
            assert_eq!(scaler.scale(n), n * ratio);
        }
    }

    #[test]
    fn test_vertical_scale_uses_height_ratio() {
        let scaler = Scaler::new(&metrics(375.0, 1624.0), ReferenceSize::default());
        assert!(approx_eq(scaler.vertical_scale(50.0), 100.0));
        assert!(approx_eq(scaler.scale(50.0), 50.0));
    }

    #[test]
    fn test_moderate_scale_factor_boundaries() {
        let scaler = Scaler::new(&metrics(750.0, 812.0), ReferenceSize::default());
        for n in [8.0_f32, 16.0, 24.0, 44.0] {
            assert!(approx_eq(scaler.moderate_scale_by(n, 0.0), n));
            assert!(approx_eq(scaler.moderate_scale_by(n, 1.0), scaler.scale(n)));
        }
    }

    #[test]
    fn test_moderate_scale_damps_extremes() {
        let scaler = Scaler::new(&metrics(750.0, 812.0), ReferenceSize::default());
        let full = scaler.scale(100.0);
        let moderate = scaler.moderate_scale(100.0);
        assert!(moderate > 100.0);
        assert!(moderate < full);
        assert!(approx_eq(moderate, 150.0));
    }

    #[test]
    fn test_degenerate_width_clamps_ratio_to_identity() {
        let scaler = Scaler::new(&metrics(0.0, 812.0), ReferenceSize::default());
        assert_eq!(scaler.horizontal_ratio(), 1.0);
        assert_eq!(scaler.scale(24.0), 24.0);
        // Height was fine, so the vertical axis still scales
        assert_eq!(scaler.vertical_ratio(), 1.0);
    }

    #[test]
    fn test_output_stays_finite_and_non_negative() {
        let compact = Scaler::new(&metrics(200.0, 400.0), ReferenceSize::default());
        let huge = Scaler::new(&metrics(2732.0, 2048.0), ReferenceSize::default());
        for scaler in [compact, huge] {
            for n in [0.5_f32, 4.0, 44.0, 375.0] {
                for value in [
                    scaler.scale(n),
                    scaler.vertical_scale(n),
                    scaler.moderate_scale(n),
                ] {
                    assert!(value.is_finite());
                    assert!(value >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_identity_scaler() {
        let scaler = Scaler::identity();
        assert_eq!(scaler.scale(17.0), 17.0);
        assert_eq!(scaler.vertical_scale(17.0), 17.0);
        assert_eq!(scaler.moderate_scale(17.0), 17.0);
    }

    // ==========================================================================
    // Responsive Value Tests
    // ==========================================================================

    #[test]
    fn test_resolve_prefers_exact_match() {
        let value = ResponsiveValue::new(16.0).sm(12.0).lg(20.0);
        assert_eq!(*value.resolve(Breakpoint::Sm), 12.0);
        assert_eq!(*value.resolve(Breakpoint::Lg), 20.0);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let value = ResponsiveValue::new(20.0).xs(10.0);
        assert_eq!(value.resolve_copied(Breakpoint::Md), 20.0);
        assert_eq!(value.resolve_copied(Breakpoint::Tablet), 20.0);
        assert_eq!(value.resolve_copied(Breakpoint::Xs), 10.0);
    }

    #[test]
    fn test_resolve_works_for_non_copy_payloads() {
        let value = ResponsiveValue::new("stack".to_string()).tablet("grid".to_string());
        assert_eq!(value.resolve(Breakpoint::Md), "stack");
        assert_eq!(value.resolve(Breakpoint::Tablet), "grid");
    }

    #[test]
    fn test_from_map_requires_default() {
        let mut overrides = HashMap::new();
        overrides.insert(Breakpoint::Sm, 12.0);

        let err = ResponsiveValue::from_map(overrides.clone(), None).unwrap_err();
        assert_eq!(err, ConfigError::MissingDefault);

        let value = ResponsiveValue::from_map(overrides, Some(16.0)).unwrap();
        assert_eq!(value.resolve_copied(Breakpoint::Sm), 12.0);
        assert_eq!(value.resolve_copied(Breakpoint::Lg), 16.0);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_responsive_value_deserialization() {
        let value: ResponsiveValue<f32> =
            serde_json::from_str(r#"{"default": 16.0, "sm": 12.0, "lg": 20.0}"#).unwrap();
        assert_eq!(value.resolve_copied(Breakpoint::Sm), 12.0);
        assert_eq!(value.resolve_copied(Breakpoint::Md), 16.0);
    }

    #[test]
    fn test_responsive_value_missing_default_fails_to_parse() {
        let result: std::result::Result<ResponsiveValue<f32>, _> =
            serde_json::from_str(r#"{"sm": 12.0, "lg": 20.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_responsive_value_serializes_without_empty_slots() {
        let value = ResponsiveValue::new(16.0).lg(24.0);
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains("\"default\""));
        assert!(json.contains("\"lg\""));
        assert!(!json.contains("\"xs\""));
    }

    #[test]
    fn test_breakpoint_serialization() {
        let json = serde_json::to_string(&Breakpoint::Tablet).unwrap();
        assert_eq!(json, "\"tablet\"");
        let deserialized: Breakpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Breakpoint::Tablet);
    }

    #[test]
    fn test_scaler_serialization() {
        let scaler = Scaler::new(&metrics(414.0, 896.0), ReferenceSize::default());
        let json = serde_json::to_string(&scaler).unwrap();
        let deserialized: Scaler = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, scaler);
    }
}
