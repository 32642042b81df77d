// SPDX-License-Identifier: MPL-2.0
//! Image-processing collaborator: decode, transform and encode.
//!
//! The editor session only talks to the functions re-exported here, never to
//! the `image` crate directly.

pub mod export;
pub mod image;
pub mod image_transform;

// Re-export commonly used types
pub use export::save_image;
pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};
pub use image_transform::ResizeFilter;

/// Supported media extensions
pub mod extensions {
    /// Extensions offered by the open dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp", "ico",
    ];

    /// Image format filters for the save dialog, PNG first.
    pub const IMAGE_SAVE_FILTERS: &[(&str, &[&str])] = &[
        ("PNG", &["png"]),
        ("JPEG", &["jpg", "jpeg"]),
        ("BMP", &["bmp"]),
        ("WebP", &["webp"]),
        ("TIFF", &["tiff", "tif"]),
    ];

    /// Returns true if the path has an extension the open dialog offers.
    pub fn is_supported_image(path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}
