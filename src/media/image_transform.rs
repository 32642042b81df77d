// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions for resize, free-angle rotate and flip.
//!
//! Every function takes the source by reference and returns a fresh image;
//! nothing is mutated in place.
//!
//! Image dimension conversions between u32 and f32 for sampling math.
//! Precision loss is acceptable for typical image sizes.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::domain::editing::{DialAngle, FlipAxis, ResizeDimensions};
use crate::media::ImageData;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView, ImageBuffer, Pixel};
use serde::{Deserialize, Serialize};

/// Tolerance used when deciding whether a back-projected sample still lies
/// inside the source frame.
const SAMPLE_EPSILON: f32 = 1e-4;

// ==========================================================================
// Resize Filter
// ==========================================================================

/// Resampling filter used by the resize tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    /// Nearest neighbor (fastest, blocky).
    Nearest,
    /// Bilinear interpolation.
    #[default]
    Triangle,
    /// Cubic interpolation.
    CatmullRom,
    /// Lanczos with window 3 (slowest, sharpest).
    Lanczos3,
}

impl ResizeFilter {
    /// Convert to the image crate's `FilterType`.
    #[must_use]
    pub fn to_image_filter(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

// ==========================================================================
// Image Transformation Functions
// ==========================================================================

/// Resize the image to exactly the provided dimensions (aspect ratio is not kept).
pub fn resize(image: &DynamicImage, dimensions: ResizeDimensions, filter: ResizeFilter) -> DynamicImage {
    image.resize_exact(
        dimensions.width(),
        dimensions.height(),
        filter.to_image_filter(),
    )
}

/// Rotate an image about its own center, keeping the input frame size.
///
/// The pivot is `(width / 2, height / 2)` and the scale is 1.0. Positive
/// angles turn the content counter-clockwise on screen. Corners that leave
/// the frame are clipped; uncovered areas are filled with transparent black
/// (black for images without alpha). Sampling is bilinear, so a 0° rotation
/// returns the pixels unchanged.
///
/// Images with an alpha channel come back as RGBA8, all others as RGB8.
pub fn rotate_about_center(image: &DynamicImage, angle: DialAngle) -> DynamicImage {
    if image.color().has_alpha() {
        DynamicImage::ImageRgba8(warp_about_center(&image.to_rgba8(), angle))
    } else {
        DynamicImage::ImageRgb8(warp_about_center(&image.to_rgb8(), angle))
    }
}

/// Mirror an image along the given axis.
pub fn flip(image: &DynamicImage, axis: FlipAxis) -> DynamicImage {
    match axis {
        FlipAxis::Horizontal => image.fliph(),
        FlipAxis::Vertical => image.flipv(),
    }
}

/// Convert DynamicImage to ImageData for display.
pub fn dynamic_to_image_data(dynamic: &DynamicImage) -> ImageData {
    let (width, height) = dynamic.dimensions();
    let pixels = dynamic.to_rgba8().into_vec();
    ImageData::from_rgba(width, height, pixels)
}

/// Size at which an image is drawn inside a `max_side`-sized square preview.
///
/// Uses `min(max / width, max / height)` as the scale, so small images are
/// enlarged as well as large ones shrunk. Both sides are at least 1 pixel.
#[must_use]
pub fn fit_within(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let scale = f64::min(
        f64::from(max_side) / f64::from(width),
        f64::from(max_side) / f64::from(height),
    );
    let fitted_width = (f64::from(width) * scale).floor().max(1.0) as u32;
    let fitted_height = (f64::from(height) * scale).floor().max(1.0) as u32;
    (fitted_width, fitted_height)
}

/// Inverse-maps every destination pixel through the rotation and samples the source.
fn warp_about_center<P>(
    src: &ImageBuffer<P, Vec<u8>>,
    angle: DialAngle,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = src.dimensions();
    let mut out: ImageBuffer<P, Vec<u8>> = ImageBuffer::new(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    let (sin_a, cos_a) = angle.radians().sin_cos();
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;

    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let src_x = cos_a * dx - sin_a * dy + cx;
        let src_y = sin_a * dx + cos_a * dy + cy;

        if let Some(sample) = sample_bilinear(src, src_x, src_y) {
            *pixel = sample;
        }
    }

    out
}

fn sample_bilinear<P>(src: &ImageBuffer<P, Vec<u8>>, x: f32, y: f32) -> Option<P>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = src.dimensions();
    let max_x = (width - 1) as f32;
    let max_y = (height - 1) as f32;

    if !x.is_finite()
        || !y.is_finite()
        || x < -SAMPLE_EPSILON
        || y < -SAMPLE_EPSILON
        || x > max_x + SAMPLE_EPSILON
        || y > max_y + SAMPLE_EPSILON
    {
        return None;
    }

    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);
    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = src.get_pixel(x0, y0);
    let p10 = src.get_pixel(x1, y0);
    let p01 = src.get_pixel(x0, y1);
    let p11 = src.get_pixel(x1, y1);

    let w00 = (1.0 - fx) * (1.0 - fy);
    let w10 = fx * (1.0 - fy);
    let w01 = (1.0 - fx) * fy;
    let w11 = fx * fy;

    let mut out = *p00;
    for (i, channel) in out.channels_mut().iter_mut().enumerate() {
        let value = f32::from(p00.channels()[i]) * w00
            + f32::from(p10.channels()[i]) * w10
            + f32::from(p01.channels()[i]) * w01
            + f32::from(p11.channels()[i]) * w11;
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }
    Some(out)
}
