// SPDX-License-Identifier: MPL-2.0
//! Default values for settings that are not present in `settings.toml`.

use crate::media::export::DEFAULT_EXPORT_EXTENSION as EXPORT_EXTENSION;

// ==========================================================================
// Window
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 500.0;

// ==========================================================================
// Editor
// ==========================================================================

/// Side of the angle dial's bounding box, in logical pixels.
pub const DEFAULT_DIAL_SIZE: f32 = 100.0;
pub const MIN_DIAL_SIZE: f32 = 40.0;
pub const MAX_DIAL_SIZE: f32 = 400.0;

/// Side of the square preview area, in logical pixels.
pub const DEFAULT_PREVIEW_MAX_SIZE: u32 = 400;
pub const MIN_PREVIEW_MAX_SIZE: u32 = 100;
pub const MAX_PREVIEW_MAX_SIZE: u32 = 4096;

/// Appended to save paths without an extension.
pub const DEFAULT_EXPORT_EXTENSION: &str = EXPORT_EXTENSION;
