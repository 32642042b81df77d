// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for image editing operations:
//! - [`DialAngle`]: Rotation angle wrapped into `[0, 360)`
//! - [`ResizeDimensions`]: Validated resize target
//! - [`FlipAxis`]: Mirror axis for the flip tool

pub mod newtypes;

pub use newtypes::{DialAngle, DimensionError, FlipAxis, ResizeDimensions, MAX_RESIZE_BYTES};
