// SPDX-License-Identifier: MPL-2.0
use iced_pivot::config;
use iced_pivot::domain::editing::{FlipAxis, ResizeDimensions};
use iced_pivot::editor::{EditorSession, SaveOutcome, TransformKind};
use iced_pivot::i18n::fluent::I18n;
use iced_pivot::media::ResizeFilter;
use image_rs::{GenericImageView, Rgba, RgbaImage};
use std::fs;
use tempfile::tempdir;

fn write_test_image(dir: &std::path::Path, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join("input.png");
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    img.save(&path).expect("Failed to write test image");
    path
}

#[test]
fn load_resize_rotate_save_exports_latest_transform() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let input = write_test_image(dir.path(), 200, 100);

    let mut session = EditorSession::new();
    let loaded = session.load(&input).expect("load succeeds");
    assert_eq!(loaded.map(|img| img.dimensions()), Some((200, 100)));

    let dims = ResizeDimensions::new(100, 50).expect("valid dimensions");
    let resized = session.request_resize(dims).expect("resize result");
    assert_eq!(resized.dimensions(), (100, 50));

    // Every transform starts from the loaded image, so the rotation keeps
    // the loaded frame rather than the resized one.
    let rotated = session.request_rotate(90.0).expect("rotate result");
    assert_eq!(rotated.dimensions(), (200, 100));
    assert_eq!(session.active_transform(), Some(TransformKind::Rotate));

    let target = dir.path().join("edited");
    let outcome = session.save(&target).expect("save succeeds");
    let written = dir.path().join("edited.png");
    assert_eq!(outcome, SaveOutcome::Saved(written.clone()));

    let reopened = image_rs::open(&written).expect("Failed to reopen export");
    let expected = session
        .result(TransformKind::Rotate)
        .expect("rotate result kept")
        .to_rgba8();
    assert_eq!(reopened.to_rgba8(), expected);
}

#[test]
fn flip_then_cancelled_save_leaves_no_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let input = write_test_image(dir.path(), 6, 4);

    let mut session = EditorSession::new();
    session.load(&input).expect("load succeeds");
    assert!(session.request_flip(Some(FlipAxis::Vertical)).is_some());

    let outcome = session.save(std::path::Path::new("")).expect("cancel is not an error");
    assert_eq!(outcome, SaveOutcome::Skipped);
    let entries = fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(entries, 1);
}

#[test]
fn editor_settings_come_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\n\n[editor]\ndial_size = 160.0\nresize_filter = \"lanczos3\"\n",
    )
    .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);

    let settings = loaded.editor.to_editor_settings();
    assert_eq!(settings.dial_size, 160.0);
    assert_eq!(settings.session.resize_filter, ResizeFilter::Lanczos3);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn malformed_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[editor\n").expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, config::Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
