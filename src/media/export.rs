// SPDX-License-Identifier: MPL-2.0
//! Encoding the flattened result to disk.
//!
//! The output format follows the target file's extension; PNG is used when
//! the extension is missing or not one the `image` build can write.

use crate::error::{Error, Result};
use image_rs::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// Extension appended when the chosen path has none.
pub const DEFAULT_EXPORT_EXTENSION: &str = "png";

/// Picks the encoder for a path from its extension (case-insensitive).
#[must_use]
pub fn format_for_path(path: &Path) -> ImageFormat {
    let ext_lower = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase);

    // Note: png is listed explicitly for clarity even though it matches the default
    #[allow(clippy::match_same_arms)]
    match ext_lower.as_deref() {
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        Some("png") => ImageFormat::Png,
        Some("gif") => ImageFormat::Gif,
        Some("bmp") => ImageFormat::Bmp,
        Some("ico") => ImageFormat::Ico,
        Some("tiff" | "tif") => ImageFormat::Tiff,
        Some("webp") => ImageFormat::WebP,
        _ => ImageFormat::Png,
    }
}

/// Returns `path` with `default_extension` appended when it has no extension.
#[must_use]
pub fn with_default_extension(path: &Path, default_extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(default_extension)
    }
}

/// Encode `image` to `path`.
///
/// A path without extension gets `default_extension` appended. Formats that
/// cannot carry alpha (JPEG) receive an RGB copy of the pixels.
///
/// Returns the path actually written.
///
/// # Errors
///
/// Returns [`Error::Encode`] if encoding fails or the file cannot be written.
pub fn save_image(image: &DynamicImage, path: &Path, default_extension: &str) -> Result<PathBuf> {
    let target = with_default_extension(path, default_extension);
    let format = format_for_path(&target);

    let result = if format == ImageFormat::Jpeg && image.color().has_alpha() {
        DynamicImage::ImageRgb8(image.to_rgb8()).save_with_format(&target, format)
    } else {
        image.save_with_format(&target, format)
    };

    result.map_err(|err| Error::Encode(format!("{}: {err}", target.display())))?;
    log::info!("Saved {} as {format:?}", target.display());
    Ok(target)
}
