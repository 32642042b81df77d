// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The editor reports what it needs from the outside world as
//! [`ImageEditorEvent`]s; this module turns them into file dialogs and toasts.

use super::Message;
use crate::media::extensions::{IMAGE_EXTENSIONS, IMAGE_SAVE_FILTERS};
use crate::ui::image_editor::{self, Event as ImageEditorEvent, State as ImageEditorState};
use crate::ui::notifications;
use iced::Task;
use std::path::PathBuf;

/// Mutable slices of `App` needed by the handlers.
pub struct UpdateContext<'a> {
    pub image_editor: &'a mut ImageEditorState,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_image_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: image_editor::Message,
) -> Task<Message> {
    let event = ctx.image_editor.update(message);
    handle_image_editor_event(ctx, event)
}

pub fn handle_image_editor_event(
    ctx: &mut UpdateContext<'_>,
    event: ImageEditorEvent,
) -> Task<Message> {
    match event {
        ImageEditorEvent::None => Task::none(),
        ImageEditorEvent::OpenRequested => handle_open_file_dialog(),
        ImageEditorEvent::SaveRequested => {
            let extension = ctx
                .image_editor
                .session()
                .options()
                .default_export_extension
                .clone();
            handle_save_file_dialog(format!("edited.{extension}"))
        }
        ImageEditorEvent::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

/// Opens the platform file picker filtered to supported images.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Image Files", IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

/// Opens the platform save dialog with `file_name` prefilled.
pub fn handle_save_file_dialog(file_name: String) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(file_name);
            for (name, exts) in IMAGE_SAVE_FILTERS {
                dialog = dialog.add_filter(*name, exts);
            }
            dialog
                .add_filter("All files", &["*"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Loads the picked file. A cancelled dialog is treated as an empty path.
pub fn handle_open_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let path = path.unwrap_or_default();
    let event = ctx.image_editor.open(&path);

    let loaded = matches!(event, ImageEditorEvent::None)
        && !path.as_os_str().is_empty()
        && ctx.image_editor.has_image();
    if loaded {
        ctx.notifications.clear_load_errors();
    }

    handle_image_editor_event(ctx, event)
}

/// Exports to the picked file. A cancelled dialog writes nothing.
pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let path = path.unwrap_or_default();
    let event = ctx.image_editor.save(&path);
    handle_image_editor_event(ctx, event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::SessionOptions;
    use crate::ui::image_editor::EditorSettings;
    use crate::ui::notifications::{Notification, Severity};
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn editor() -> ImageEditorState {
        ImageEditorState::new(EditorSettings {
            dial_size: 100.0,
            preview_max_size: 400,
            session: SessionOptions::default(),
        })
    }

    #[test]
    fn notify_event_pushes_toast() {
        let mut state = editor();
        let mut manager = notifications::Manager::new();
        let mut ctx = UpdateContext {
            image_editor: &mut state,
            notifications: &mut manager,
        };
        let _ = handle_image_editor_event(
            &mut ctx,
            ImageEditorEvent::Notify(Notification::error("notification-save-error")),
        );
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn cancelled_open_is_a_no_op() {
        let mut state = editor();
        let mut manager = notifications::Manager::new();
        let mut ctx = UpdateContext {
            image_editor: &mut state,
            notifications: &mut manager,
        };
        let _ = handle_open_dialog_result(&mut ctx, None);
        assert!(!state.has_image());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn failed_open_then_success_clears_load_error() {
        let dir = tempdir().expect("temp dir");
        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"not an image").expect("write garbage");
        let good = dir.path().join("good.png");
        RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255]))
            .save(&good)
            .expect("write png");

        let mut state = editor();
        let mut manager = notifications::Manager::new();
        let mut ctx = UpdateContext {
            image_editor: &mut state,
            notifications: &mut manager,
        };

        let _ = handle_open_dialog_result(&mut ctx, Some(broken));
        assert_eq!(ctx.notifications.visible_count(), 1);
        assert!(ctx
            .notifications
            .visible()
            .all(|n| n.severity() == Severity::Error));

        let _ = handle_open_dialog_result(&mut ctx, Some(good));
        assert!(ctx.image_editor.has_image());
        assert_eq!(ctx.notifications.visible_count(), 0);
    }

    #[test]
    fn save_result_writes_file_and_confirms() {
        let dir = tempdir().expect("temp dir");
        let source = dir.path().join("in.png");
        RgbaImage::from_pixel(4, 2, Rgba([9, 9, 9, 255]))
            .save(&source)
            .expect("write png");

        let mut state = editor();
        let mut manager = notifications::Manager::new();
        let mut ctx = UpdateContext {
            image_editor: &mut state,
            notifications: &mut manager,
        };
        let _ = handle_open_dialog_result(&mut ctx, Some(source));

        let target = dir.path().join("out");
        let _ = handle_save_dialog_result(&mut ctx, Some(target));
        assert!(dir.path().join("out.png").exists());
        assert!(manager
            .visible()
            .any(|n| n.message_key() == "notification-save-success"));
    }

    #[test]
    fn cancelled_save_writes_nothing() {
        let mut state = editor();
        let mut manager = notifications::Manager::new();
        let mut ctx = UpdateContext {
            image_editor: &mut state,
            notifications: &mut manager,
        };
        let _ = handle_save_dialog_result(&mut ctx, None);
        assert!(!manager.has_notifications());
    }
}
