//! The immutable resolution context
//!
//! A [`UiContext`] bundles everything value resolution needs — display
//! snapshot, reference size, breakpoint, scaler, theme, font preference —
//! and is passed explicitly through view construction instead of living as
//! ambient global state. Display and theme changes produce a fresh context;
//! nothing is recomputed lazily, so a stale breakpoint after rotation
//! cannot exist by construction.

use crate::layout::{policy, LayoutTable, TouchTable};
use crate::responsive::{Breakpoint, ReferenceSize, Scaler};
use crate::theme::{get_theme, Theme, ThemeVariant};
use crate::typography::TypeScale;
use app_platform::{DisplayEvent, DisplayMetrics};
use serde::{Deserialize, Serialize};

/// Immutable snapshot threaded through view construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiContext {
    metrics: DisplayMetrics,
    reference: ReferenceSize,
    breakpoint: Breakpoint,
    scaler: Scaler,
    theme: Theme,
    font_scale: f32,
}

impl UiContext {
    /// Build a context from a display snapshot with the default reference size
    pub fn new(metrics: DisplayMetrics, variant: ThemeVariant) -> Self {
        Self::with_reference(metrics, ReferenceSize::default(), variant)
    }

    /// Build a context against a custom reference design size
    pub fn with_reference(
        metrics: DisplayMetrics,
        reference: ReferenceSize,
        variant: ThemeVariant,
    ) -> Self {
        Self {
            breakpoint: Breakpoint::classify(metrics.width()),
            scaler: Scaler::new(&metrics, reference),
            theme: get_theme(variant),
            metrics,
            reference,
            font_scale: 1.0,
        }
    }

    /// The display snapshot this context was built from
    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    /// The reference design size in use
    pub fn reference(&self) -> ReferenceSize {
        self.reference
    }

    /// The breakpoint classification of the current width
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// The scale functions for the current display
    pub fn scaler(&self) -> Scaler {
        self.scaler
    }

    /// The active theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The clamped user font-scale preference
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    /// Whether the current breakpoint is the tablet class
    pub fn is_tablet(&self) -> bool {
        self.breakpoint.is_tablet()
    }

    /// Fresh context with a display event applied
    ///
    /// Breakpoint and scaler are always recomputed from the new metrics.
    pub fn apply(&self, event: DisplayEvent) -> Self {
        let metrics = self.metrics.apply(event);
        Self {
            breakpoint: Breakpoint::classify(metrics.width()),
            scaler: Scaler::new(&metrics, self.reference),
            metrics,
            ..self.clone()
        }
    }

    /// Fresh context with a different theme variant
    pub fn with_theme(&self, variant: ThemeVariant) -> Self {
        Self {
            theme: get_theme(variant),
            ..self.clone()
        }
    }

    /// Fresh context with the user's font-scale preference
    pub fn with_font_scale(&self, font_scale: f32) -> Self {
        Self {
            font_scale: font_scale.clamp(policy::FONT_SCALE_MIN, policy::FONT_SCALE_MAX),
            ..self.clone()
        }
    }

    /// Spacing and radius helpers for this context
    pub fn layout(&self) -> LayoutTable {
        LayoutTable::new(self.scaler, self.breakpoint)
    }

    /// Touch-target helpers for this context
    pub fn touch(&self) -> TouchTable {
        TouchTable::new(self.scaler)
    }

    /// Typography resolver for this context
    pub fn type_scale(&self) -> TypeScale {
        TypeScale::with_font_scale(self.scaler, self.font_scale)
    }
}
