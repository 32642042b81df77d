// SPDX-License-Identifier: MPL-2.0
//! The editor session: the loaded image plus the last result of each transform kind.
//!
//! Transforms always start from the loaded base image, never from one
//! another's results. The export picks a single result by fixed precedence
//! (flip, then rotate, then resize, then the base image); edits are not
//! composed.

use crate::domain::editing::{DialAngle, FlipAxis, ResizeDimensions};
use crate::error::Result;
use crate::media::{self, export, image_transform, ResizeFilter};
use image_rs::DynamicImage;
use std::path::{Path, PathBuf};

/// Knobs that shape how the session talks to the image collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Filter used by [`EditorSession::request_resize`].
    pub resize_filter: ResizeFilter,
    /// Extension appended to save paths that have none.
    pub default_export_extension: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            resize_filter: ResizeFilter::default(),
            default_export_extension: export::DEFAULT_EXPORT_EXTENSION.to_string(),
        }
    }
}

/// Which result slot a transform writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Resize,
    Rotate,
    Flip,
}

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The export was written to this path.
    Saved(PathBuf),
    /// Nothing to do: empty path (cancelled picker) or no image loaded.
    Skipped,
}

/// A decoded image together with the file it came from.
#[derive(Debug, Clone)]
struct LoadedImage {
    path: PathBuf,
    image: DynamicImage,
}

/// Owns the loaded image and mediates transform requests against it.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    options: SessionOptions,
    base: Option<LoadedImage>,
    resized: Option<DynamicImage>,
    rotated: Option<DynamicImage>,
    flipped: Option<DynamicImage>,
}

impl EditorSession {
    /// Creates an empty session with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with the given options.
    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Decode `path` and make it the new base image.
    ///
    /// An empty path is a cancelled picker and does nothing. A successful load
    /// clears all three result slots so nothing from the previous image can
    /// leak into the next export.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::error::Error::Decode) if the file cannot
    /// be decoded; the session is left unchanged.
    pub fn load(&mut self, path: &Path) -> Result<Option<&DynamicImage>> {
        if path.as_os_str().is_empty() {
            log::debug!("Load cancelled: empty path");
            return Ok(None);
        }

        let image = media::load_image(path)?;
        self.resized = None;
        self.rotated = None;
        self.flipped = None;
        let loaded = self.base.insert(LoadedImage {
            path: path.to_path_buf(),
            image,
        });
        Ok(Some(&loaded.image))
    }

    /// Resize the base image to exactly `dimensions`.
    ///
    /// Returns `None` without touching any slot when no image is loaded.
    pub fn request_resize(&mut self, dimensions: ResizeDimensions) -> Option<&DynamicImage> {
        let Some(base) = self.base_image() else {
            log::debug!("Resize ignored: no image loaded");
            return None;
        };

        let result = image_transform::resize(base, dimensions, self.options.resize_filter);
        log::info!(
            "Resized to {}x{}",
            dimensions.width(),
            dimensions.height()
        );
        Some(self.resized.insert(result))
    }

    /// Rotate the base image by `angle_degrees` about its center.
    ///
    /// The output keeps the base frame size; corners are clipped.
    /// Returns `None` when no image is loaded.
    pub fn request_rotate(&mut self, angle_degrees: f32) -> Option<&DynamicImage> {
        let Some(base) = self.base_image() else {
            log::debug!("Rotate ignored: no image loaded");
            return None;
        };

        let angle = DialAngle::new(angle_degrees);
        let result = image_transform::rotate_about_center(base, angle);
        log::info!("Rotated by {angle}");
        Some(self.rotated.insert(result))
    }

    /// Mirror the base image along `choice`.
    ///
    /// `None` is a cancelled choice and does nothing, as does a missing image.
    pub fn request_flip(&mut self, choice: Option<FlipAxis>) -> Option<&DynamicImage> {
        let Some(axis) = choice else {
            log::debug!("Flip cancelled");
            return None;
        };
        let Some(base) = self.base_image() else {
            log::debug!("Flip ignored: no image loaded");
            return None;
        };

        let result = image_transform::flip(base, axis);
        log::info!("Flipped {axis:?}");
        Some(self.flipped.insert(result))
    }

    /// The image a save would write: flip if set, else rotate, else resize,
    /// else the base image. `None` when nothing is loaded.
    pub fn resolve_for_export(&self) -> Option<&DynamicImage> {
        let mut edited = self.base_image()?;
        if let Some(resized) = &self.resized {
            edited = resized;
        }
        if let Some(rotated) = &self.rotated {
            edited = rotated;
        }
        if let Some(flipped) = &self.flipped {
            edited = flipped;
        }
        Some(edited)
    }

    /// Which slot [`resolve_for_export`](Self::resolve_for_export) would use.
    pub fn active_transform(&self) -> Option<TransformKind> {
        if self.flipped.is_some() {
            Some(TransformKind::Flip)
        } else if self.rotated.is_some() {
            Some(TransformKind::Rotate)
        } else if self.resized.is_some() {
            Some(TransformKind::Resize)
        } else {
            None
        }
    }

    /// Encode the resolved export to `path`.
    ///
    /// An empty path (cancelled picker) or an empty session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`](crate::error::Error::Encode) if the target
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<SaveOutcome> {
        if path.as_os_str().is_empty() {
            log::debug!("Save cancelled: empty path");
            return Ok(SaveOutcome::Skipped);
        }
        let Some(image) = self.resolve_for_export() else {
            log::debug!("Save ignored: no image loaded");
            return Ok(SaveOutcome::Skipped);
        };

        let written = export::save_image(image, path, &self.options.default_export_extension)?;
        Ok(SaveOutcome::Saved(written))
    }

    /// Returns true once an image has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.base.is_some()
    }

    /// The loaded image, untouched by any transform.
    pub fn base_image(&self) -> Option<&DynamicImage> {
        self.base.as_ref().map(|loaded| &loaded.image)
    }

    /// The file the base image was decoded from.
    pub fn source_path(&self) -> Option<&Path> {
        self.base.as_ref().map(|loaded| loaded.path.as_path())
    }

    /// The last result stored for `kind`, if any.
    pub fn result(&self, kind: TransformKind) -> Option<&DynamicImage> {
        match kind {
            TransformKind::Resize => self.resized.as_ref(),
            TransformKind::Rotate => self.rotated.as_ref(),
            TransformKind::Flip => self.flipped.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{GenericImageView, Rgba, RgbaImage};
    use tempfile::{tempdir, TempDir};

    /// Writes a `width`x`height` PNG with a distinct left half and returns its path.
    fn write_png(width: u32, height: u32) -> (TempDir, PathBuf) {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("input.png");
        let img = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        img.save(&path).expect("write png");
        (dir, path)
    }

    fn loaded_session(width: u32, height: u32) -> (TempDir, EditorSession) {
        let (dir, path) = write_png(width, height);
        let mut session = EditorSession::new();
        session.load(&path).expect("load succeeds");
        (dir, session)
    }

    fn dims(width: i64, height: i64) -> ResizeDimensions {
        ResizeDimensions::new(width, height).expect("valid dimensions")
    }

    #[test]
    fn new_session_is_empty() {
        let session = EditorSession::new();
        assert!(!session.is_loaded());
        assert!(session.resolve_for_export().is_none());
        assert_eq!(session.active_transform(), None);
    }

    #[test]
    fn load_with_empty_path_is_a_no_op() {
        let mut session = EditorSession::new();
        let loaded = session.load(Path::new("")).expect("empty path is not an error");
        assert!(loaded.is_none());
        assert!(!session.is_loaded());
    }

    #[test]
    fn load_failure_keeps_previous_state() {
        let (_dir, mut session) = loaded_session(8, 4);
        session.request_resize(dims(4, 2));

        let bad = tempdir().expect("temp dir");
        let bad_path = bad.path().join("broken.png");
        std::fs::write(&bad_path, b"garbage").expect("write garbage");

        assert!(matches!(session.load(&bad_path), Err(Error::Decode(_))));
        assert_eq!(session.base_image().map(GenericImageView::dimensions), Some((8, 4)));
        assert!(session.result(TransformKind::Resize).is_some());
    }

    #[test]
    fn load_resets_result_slots() {
        let (_dir, mut session) = loaded_session(8, 4);
        session.request_resize(dims(4, 2));
        session.request_rotate(30.0);
        session.request_flip(Some(FlipAxis::Horizontal));

        let (_other_dir, other_path) = write_png(6, 6);
        session.load(&other_path).expect("second load");

        assert_eq!(session.active_transform(), None);
        assert_eq!(
            session.resolve_for_export().map(GenericImageView::dimensions),
            Some((6, 6))
        );
        assert_eq!(session.source_path(), Some(other_path.as_path()));
    }

    #[test]
    fn transforms_without_image_are_guarded_no_ops() {
        let mut session = EditorSession::new();
        assert!(session.request_resize(dims(10, 10)).is_none());
        assert!(session.request_rotate(45.0).is_none());
        assert!(session.request_flip(Some(FlipAxis::Vertical)).is_none());
        assert_eq!(session.active_transform(), None);
    }

    #[test]
    fn resize_returns_exact_dimensions() {
        let (_dir, mut session) = loaded_session(200, 100);
        let resized = session.request_resize(dims(30, 70)).expect("resized");
        assert_eq!(resized.dimensions(), (30, 70));
        assert_eq!(session.active_transform(), Some(TransformKind::Resize));
    }

    #[test]
    fn oversized_resize_is_rejected_and_keeps_previous_result() {
        let (_dir, mut session) = loaded_session(20, 10);
        session.request_resize(dims(10, 5));

        let oversized = ResizeDimensions::parse("4294967295", "4294967295");
        assert_eq!(oversized, Err(crate::domain::editing::DimensionError::TooLarge));
        let err: Error = crate::domain::editing::DimensionError::TooLarge.into();
        assert_eq!(err.i18n_key(), "error-dimension-too-large");

        assert_eq!(
            session.result(TransformKind::Resize).map(GenericImageView::dimensions),
            Some((10, 5))
        );
        assert_eq!(session.base_image().map(GenericImageView::dimensions), Some((20, 10)));
    }

    #[test]
    fn rotate_keeps_base_frame_size() {
        let (_dir, mut session) = loaded_session(20, 10);
        for angle in [0.0, 33.0, 90.0, 181.0, 359.9] {
            let rotated = session.request_rotate(angle).expect("rotated");
            assert_eq!(rotated.dimensions(), (20, 10), "angle {angle}");
        }
    }

    #[test]
    fn rotate_by_zero_returns_base_pixels() {
        let (_dir, mut session) = loaded_session(9, 5);
        let base = session.base_image().expect("base").to_rgba8();
        let rotated = session.request_rotate(0.0).expect("rotated").to_rgba8();
        assert_eq!(rotated, base);
    }

    #[test]
    fn rotate_starts_from_base_even_after_resize() {
        let (_dir, mut session) = loaded_session(200, 100);
        session.request_resize(dims(100, 50));
        let rotated = session.request_rotate(90.0).expect("rotated");
        assert_eq!(rotated.dimensions(), (200, 100));
    }

    #[test]
    fn flip_never_compounds() {
        let (_dir, mut session) = loaded_session(8, 2);
        let first = session
            .request_flip(Some(FlipAxis::Horizontal))
            .expect("first flip")
            .to_rgba8();
        let second = session
            .request_flip(Some(FlipAxis::Horizontal))
            .expect("second flip")
            .to_rgba8();

        assert_eq!(first, second);
        // Left half was red in the base, so after one flip the left is blue.
        assert_eq!(second.get_pixel(0, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn cancelled_flip_keeps_previous_flip() {
        let (_dir, mut session) = loaded_session(8, 2);
        session.request_flip(Some(FlipAxis::Vertical));
        assert!(session.request_flip(None).is_none());
        assert!(session.result(TransformKind::Flip).is_some());
    }

    #[test]
    fn export_precedence_prefers_flip_then_rotate_then_resize() {
        let (_dir, mut session) = loaded_session(200, 100);

        assert_eq!(
            session.resolve_for_export().map(GenericImageView::dimensions),
            Some((200, 100))
        );

        session.request_resize(dims(40, 20));
        assert_eq!(session.active_transform(), Some(TransformKind::Resize));
        assert_eq!(
            session.resolve_for_export().map(GenericImageView::dimensions),
            Some((40, 20))
        );

        session.request_rotate(90.0);
        assert_eq!(session.active_transform(), Some(TransformKind::Rotate));
        let rotated = session.result(TransformKind::Rotate).expect("rotated").to_rgba8();
        assert_eq!(
            session.resolve_for_export().map(DynamicImage::to_rgba8),
            Some(rotated)
        );

        session.request_flip(Some(FlipAxis::Vertical));
        assert_eq!(session.active_transform(), Some(TransformKind::Flip));
        let flipped = session.result(TransformKind::Flip).expect("flipped").to_rgba8();
        assert_eq!(
            session.resolve_for_export().map(DynamicImage::to_rgba8),
            Some(flipped)
        );
    }

    #[test]
    fn precedence_does_not_depend_on_request_order() {
        let (_dir, mut session) = loaded_session(20, 10);
        session.request_flip(Some(FlipAxis::Horizontal));
        session.request_resize(dims(5, 5));
        assert_eq!(session.active_transform(), Some(TransformKind::Flip));
        assert_eq!(
            session.resolve_for_export().map(GenericImageView::dimensions),
            Some((20, 10))
        );
    }

    #[test]
    fn save_with_empty_path_writes_nothing() {
        let (dir, session) = loaded_session(4, 4);
        assert_eq!(session.save(Path::new("")), Ok(SaveOutcome::Skipped));
        let entries = std::fs::read_dir(dir.path()).expect("read dir").count();
        assert_eq!(entries, 1, "only the input file should exist");
    }

    #[test]
    fn save_without_image_is_skipped() {
        let dir = tempdir().expect("temp dir");
        let session = EditorSession::new();
        let target = dir.path().join("out.png");
        assert_eq!(session.save(&target), Ok(SaveOutcome::Skipped));
        assert!(!target.exists());
    }

    #[test]
    fn save_writes_resolved_export() {
        let (dir, mut session) = loaded_session(200, 100);
        session.request_resize(dims(100, 50));
        let target = dir.path().join("out.png");

        let outcome = session.save(&target).expect("save succeeds");
        assert_eq!(outcome, SaveOutcome::Saved(target.clone()));

        let written = image_rs::open(&target).expect("reopen export");
        assert_eq!(written.dimensions(), (100, 50));
    }

    #[test]
    fn save_uses_configured_default_extension() {
        let (_dir, path) = write_png(4, 4);
        let mut session = EditorSession::with_options(SessionOptions {
            default_export_extension: "bmp".to_string(),
            ..SessionOptions::default()
        });
        session.load(&path).expect("load");

        let out_dir = tempdir().expect("temp dir");
        let outcome = session.save(&out_dir.path().join("export")).expect("save");
        assert_eq!(outcome, SaveOutcome::Saved(out_dir.path().join("export.bmp")));
    }
}
