//! Presentation resolution engine for Wellspring
//!
//! This crate maps abstract size and style requests plus device
//! characteristics into concrete layout values: it owns the scale
//! functions, breakpoint classification, responsive value maps, the
//! layout/touch/typography policy tables, and the color themes. It renders
//! nothing itself — view construction consumes the numbers and tokens it
//! resolves.
//!
//! # Modules
//!
//! - [`responsive`] - Scale functions, breakpoints, responsive value maps
//! - [`layout`] - Spacing, radius, and touch-target policy tables
//! - [`typography`] - Semantic text roles and the type scale
//! - [`theme`] - Color themes and token utilities
//! - [`context`] - The immutable [`UiContext`] threaded through consumers
//! - [`error`] - Configuration errors
//!
//! # Example
//!
//! ```rust
//! use app_platform::{DisplayMetrics, Platform, RawDisplayMetrics};
//! use app_ui::{ButtonSize, TextRole, ThemeVariant, UiContext};
//!
//! let metrics = DisplayMetrics::from_raw(RawDisplayMetrics {
//!     width: 375.0,
//!     height: 812.0,
//!     pixel_density: 3.0,
//!     platform: Platform::Ios,
//! });
//! let ctx = UiContext::new(metrics, ThemeVariant::Light);
//!
//! let gutter = ctx.layout().content_padding();
//! let button = ctx.touch().button_size(ButtonSize::Medium);
//! let title = ctx.type_scale().style(TextRole::H1);
//! assert!(button >= 44.0);
//! assert!(title.font_size > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod layout;
pub mod responsive;
pub mod theme;
pub mod typography;

// Re-export commonly used types
pub use context::UiContext;
pub use error::{ConfigError, Result};
pub use layout::{policy, ButtonSize, LayoutTable, TouchTable};
pub use responsive::{thresholds, Breakpoint, ReferenceSize, ResponsiveValue, Scaler};
pub use theme::{
    dark_theme, get_theme, light_theme, parse_hex_color, rgb_to_hex, with_alpha, Color,
    ColorTokens, Theme, ThemeVariant,
};
pub use typography::{font_weight, line_height, tracking, TextRole, TextStyle, TypeScale};
