// SPDX-License-Identifier: MPL-2.0
//! Image decoding and the display-side pixel buffer handed to iced.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;

/// Pixels ready for the preview widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Wraps RGBA pixels in a handle; the buffer is moved, not copied.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decode the file at `path` into a `DynamicImage`.
///
/// The format is sniffed from the file contents, so a mislabeled extension
/// still decodes.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file cannot be read or is not a
/// supported/valid image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let img_bytes = fs::read(path).map_err(|e| Error::Decode(format!("{}: {e}", path.display())))?;

    let img = image_rs::load_from_memory(&img_bytes)
        .map_err(|e| Error::Decode(format!("{}: {e}", path.display())))?;

    let (width, height) = img.dimensions();
    log::info!("Decoded {} ({width}x{height})", path.display());

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width(), 4);
        assert_eq!(data.height(), 2);
    }

    #[test]
    fn load_missing_image_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Decode(message)) => assert!(message.contains("does_not_exist.png")),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        std::fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn image_data_hands_pixels_to_handle() {
        let data = ImageData::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(data.width, 2);
        assert_eq!(data.height, 1);
        match &data.handle {
            image::Handle::Rgba { pixels, .. } => {
                assert_eq!(pixels.as_ref(), &[1, 2, 3, 4, 5, 6, 7, 8]);
            }
            other => panic!("expected RGBA handle, got {other:?}"),
        }
    }
}
