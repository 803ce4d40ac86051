//! Platform integration for Wellspring
//!
//! This crate owns the boundary to the host rendering runtime: the display
//! metrics it reports (size, pixel density, platform) and the discrete
//! events it emits when the display changes (resize, rotation, density
//! change).
//!
//! Metrics arrive untrusted as [`RawDisplayMetrics`] and are validated into
//! an immutable [`DisplayMetrics`] snapshot. Consumers never mutate a
//! snapshot; applying a [`DisplayEvent`] produces a fresh one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod display;

pub use display::{
    DisplayEvent, DisplayMetrics, DisplaySource, MetricsError, Orientation, Platform,
    RawDisplayMetrics,
};
