// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always within valid ranges.

use std::fmt;

// =============================================================================
// DialAngle
// =============================================================================

/// Angle in degrees, guaranteed to be within `[0, 360)`.
///
/// Any finite value is wrapped into the range; non-finite input maps to 0.
/// Values that land on exactly 360.0 after wrapping (possible in `f32` for
/// tiny negative inputs) are folded back to 0.
///
/// # Example
///
/// ```ignore
/// assert_eq!(DialAngle::new(-90.0).degrees(), 270.0);
/// assert_eq!(DialAngle::new(720.0).degrees(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DialAngle(f32);

impl DialAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0.0);

    /// Creates a new angle, wrapping the value into `[0, 360)`.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        if !degrees.is_finite() {
            return Self::ZERO;
        }
        let wrapped = degrees.rem_euclid(360.0);
        if wrapped >= 360.0 {
            Self::ZERO
        } else {
            Self(wrapped)
        }
    }

    /// Builds an angle from radians.
    #[must_use]
    pub fn from_radians(radians: f32) -> Self {
        Self::new(radians.to_degrees())
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        self.0.to_radians()
    }

    /// Returns the angle measured in the opposite direction (`360 - a`, wrapped).
    #[must_use]
    pub fn inverted(self) -> Self {
        Self::new(360.0 - self.0)
    }
}

impl fmt::Display for DialAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole degrees; 359.5 and up reads as 0, not 360.
        let rounded = self.0.round();
        let shown = if rounded >= 360.0 { 0.0 } else { rounded };
        write!(f, "{shown:.0}°")
    }
}

// =============================================================================
// ResizeDimensions
// =============================================================================

/// Reasons a width/height pair is rejected by the resize form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// One of the inputs is not an integer.
    NotAnInteger,
    /// One of the inputs is zero or negative.
    NotPositive,
    /// The result would need more than [`MAX_RESIZE_BYTES`] of RGBA pixels.
    TooLarge,
}

/// Largest RGBA8 buffer a resize may produce (512 MiB, the `image` crate's
/// default decode allocation limit).
pub const MAX_RESIZE_BYTES: u64 = 512 * 1024 * 1024;

impl DimensionError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            DimensionError::NotAnInteger => "error-dimension-not-integer",
            DimensionError::NotPositive => "error-dimension-not-positive",
            DimensionError::TooLarge => "error-dimension-too-large",
        }
    }
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::NotAnInteger => {
                write!(f, "Invalid dimension values. Please enter valid integers.")
            }
            DimensionError::NotPositive => write!(f, "Dimensions must be greater than zero."),
            DimensionError::TooLarge => write!(f, "Dimensions are too large."),
        }
    }
}

impl std::error::Error for DimensionError {}

/// Target size for a resize, guaranteed to be at least 1×1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeDimensions {
    width: u32,
    height: u32,
}

impl ResizeDimensions {
    /// Validates a signed width/height pair.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::NotPositive`] when either value is `<= 0`,
    /// [`DimensionError::NotAnInteger`] when a value does not fit in `u32`,
    /// and [`DimensionError::TooLarge`] when `width * height * 4` exceeds
    /// [`MAX_RESIZE_BYTES`].
    pub fn new(width: i64, height: i64) -> Result<Self, DimensionError> {
        if width <= 0 || height <= 0 {
            return Err(DimensionError::NotPositive);
        }
        let width = u32::try_from(width).map_err(|_| DimensionError::NotAnInteger)?;
        let height = u32::try_from(height).map_err(|_| DimensionError::NotAnInteger)?;

        let bytes = u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|pixels| pixels.checked_mul(4));
        match bytes {
            Some(bytes) if bytes <= MAX_RESIZE_BYTES => Ok(Self { width, height }),
            _ => Err(DimensionError::TooLarge),
        }
    }

    /// Parses raw text field contents.
    ///
    /// Surrounding whitespace is ignored. Both fields must parse as integers
    /// before positivity is checked, so `"abc"`/`"-1"` reports `NotAnInteger`.
    ///
    /// # Errors
    ///
    /// See [`ResizeDimensions::new`].
    pub fn parse(width: &str, height: &str) -> Result<Self, DimensionError> {
        let width = width
            .trim()
            .parse::<i64>()
            .map_err(|_| DimensionError::NotAnInteger)?;
        let height = height
            .trim()
            .parse::<i64>()
            .map_err(|_| DimensionError::NotAnInteger)?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

// =============================================================================
// FlipAxis
// =============================================================================

/// Mirror axis for the flip tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlipAxis {
    /// Mirror left-to-right.
    Horizontal,
    /// Mirror top-to-bottom. Preselected in the flip form.
    #[default]
    Vertical,
}

// =============================================================================
// Tests
// =============================================================================
