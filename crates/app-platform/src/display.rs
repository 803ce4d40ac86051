//! Display metrics reported by the host rendering runtime
//!
//! The host windowing layer reports logical size, pixel density, and the
//! platform it runs on. Those values are untrusted: a headless host or a
//! mid-rotation read can produce zero, negative, or non-finite dimensions.
//! [`DisplayMetrics::from_raw`] sanitizes them into a snapshot that the
//! layout engine can consume without further checking.

use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

/// Errors raised when the host reports unusable display metrics
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// A reported dimension was NaN or infinite
    #[error("non-finite display {name}: {value}")]
    NonFinite {
        /// Which dimension was rejected
        name: &'static str,
        /// The offending value
        value: f32,
    },

    /// A reported dimension was zero or negative
    #[error("non-positive display {name}: {value}")]
    NonPositive {
        /// Which dimension was rejected
        name: &'static str,
        /// The offending value
        value: f32,
    },
}

/// Result type for strict metrics validation
pub type Result<T> = std::result::Result<T, MetricsError>;

// =============================================================================
// Platform
// =============================================================================

/// The platform the host runtime is rendering on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS devices
    #[default]
    Ios,
    /// Android devices
    Android,
    /// Web browsers
    Web,
}

impl Platform {
    /// Whether this platform is a mobile OS (as opposed to the web shell)
    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
            Platform::Web => write!(f, "web"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "web" => Ok(Platform::Web),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

// =============================================================================
// Orientation
// =============================================================================

/// Display orientation, derived from the logical dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Height greater than or equal to width
    Portrait,
    /// Width greater than height
    Landscape,
}

// =============================================================================
// Raw Metrics
// =============================================================================

/// Display metrics exactly as reported by the host, unvalidated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawDisplayMetrics {
    /// Logical width in device-independent pixels
    pub width: f32,
    /// Logical height in device-independent pixels
    pub height: f32,
    /// Physical pixels per logical pixel
    pub pixel_density: f32,
    /// Platform the host is rendering on
    pub platform: Platform,
}

/// Source of display metrics — the seam to the host windowing layer
///
/// Production hosts read the real window; tests substitute a mock.
#[cfg_attr(test, automock)]
pub trait DisplaySource {
    /// Current metrics as reported by the host
    fn current(&self) -> RawDisplayMetrics;
}

// =============================================================================
// Validated Metrics
// =============================================================================

/// Validated, immutable display snapshot
///
/// Captured once at startup and replaced wholesale on display events.
/// Dimensions are guaranteed finite and non-negative; pixel density is
/// guaranteed finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    width: f32,
    height: f32,
    pixel_density: f32,
    platform: Platform,
}

impl DisplayMetrics {
    /// Build a snapshot from host-reported metrics, clamping degenerate values
    ///
    /// Non-finite or negative dimensions become `0.0`; a non-finite or
    /// non-positive density becomes `1.0`. Each clamp emits a warning.
    pub fn from_raw(raw: RawDisplayMetrics) -> Self {
        Self {
            width: sanitize_dimension(raw.width, "width"),
            height: sanitize_dimension(raw.height, "height"),
            pixel_density: sanitize_density(raw.pixel_density),
            platform: raw.platform,
        }
    }

    /// Build a snapshot from host-reported metrics, rejecting degenerate values
    pub fn try_from_raw(raw: RawDisplayMetrics) -> Result<Self> {
        check_dimension(raw.width, "width")?;
        check_dimension(raw.height, "height")?;
        check_dimension(raw.pixel_density, "pixel density")?;
        Ok(Self {
            width: raw.width,
            height: raw.height,
            pixel_density: raw.pixel_density,
            platform: raw.platform,
        })
    }

    /// Logical width in device-independent pixels
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Logical height in device-independent pixels
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Physical pixels per logical pixel
    pub fn pixel_density(&self) -> f32 {
        self.pixel_density
    }

    /// Platform the host is rendering on
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Orientation derived from the current dimensions
    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Width in physical pixels
    pub fn physical_width(&self) -> f32 {
        self.width * self.pixel_density
    }

    /// Height in physical pixels
    pub fn physical_height(&self) -> f32 {
        self.height * self.pixel_density
    }

    /// Produce a fresh snapshot with the given event applied
    pub fn apply(&self, event: DisplayEvent) -> Self {
        match event {
            DisplayEvent::Resized { width, height } => Self {
                width: sanitize_dimension(width, "width"),
                height: sanitize_dimension(height, "height"),
                ..*self
            },
            DisplayEvent::DensityChanged { pixel_density } => Self {
                pixel_density: sanitize_density(pixel_density),
                ..*self
            },
        }
    }

    /// Snapshot with width and height swapped, for hosts that report
    /// rotation without new dimensions
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            ..*self
        }
    }
}

// =============================================================================
// Display Events
// =============================================================================

/// Discrete display-change events emitted by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayEvent {
    /// The window or screen was resized (rotation included)
    Resized {
        /// New logical width
        width: f32,
        /// New logical height
        height: f32,
    },
    /// The display was moved to a different density (external monitor, zoom)
    DensityChanged {
        /// New physical pixels per logical pixel
        pixel_density: f32,
    },
}

fn sanitize_dimension(value: f32, name: &'static str) -> f32 {
    if !value.is_finite() || value < 0.0 {
        tracing::warn!(name, value, "host reported degenerate dimension, clamping to 0");
        0.0
    } else {
        value
    }
}

fn sanitize_density(value: f32) -> f32 {
    if !value.is_finite() || value <= 0.0 {
        tracing::warn!(value, "host reported degenerate pixel density, clamping to 1");
        1.0
    } else {
        value
    }
}

fn check_dimension(value: f32, name: &'static str) -> Result<()> {
    if !value.is_finite() {
        return Err(MetricsError::NonFinite { name, value });
    }
    if value <= 0.0 {
        return Err(MetricsError::NonPositive { name, value });
    }
    Ok(())
}
