// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the editor screen, localization and toasts
//! together, and translates editor events into file dialogs and
//! notifications.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::media::extensions::is_supported_image;
use crate::ui::image_editor::State as ImageEditorState;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    image_editor: ImageEditorState,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("editor_has_image", &self.image_editor.has_image())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and translations, then opens the startup image if one
    /// was given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            image_editor: ImageEditorState::new(config.editor.to_editor_settings()),
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        if let Some(path_str) = flags.file_path {
            let path = PathBuf::from(path_str);
            if is_supported_image(&path) {
                let mut ctx = update::UpdateContext {
                    image_editor: &mut app.image_editor,
                    notifications: &mut app.notifications,
                };
                let task = update::handle_open_dialog_result(&mut ctx, Some(path));
                return (app, task);
            }
            log::warn!("Ignoring unsupported startup file {}", path.display());
            app.notifications.push(notifications::Notification::warning(
                "notification-unsupported-file",
            ));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self
            .image_editor
            .session()
            .source_path()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str());

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            image_editor: &mut self.image_editor,
            notifications: &mut self.notifications,
        };

        match message {
            Message::ImageEditor(msg) => update::handle_image_editor_message(&mut ctx, msg),
            Message::Notification(msg) => {
                ctx.notifications.handle_message(&msg);
                Task::none()
            }
            Message::OpenDialogResult(path) => update::handle_open_dialog_result(&mut ctx, path),
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(&mut ctx, path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            image_editor: &self.image_editor,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn app_with(flags: Flags) -> App {
        App::new(flags).0
    }

    fn isolated_flags(dir: &std::path::Path) -> Flags {
        Flags {
            lang: Some("en-US".into()),
            file_path: None,
            config_dir: Some(dir.to_string_lossy().into_owned()),
        }
    }

    #[test]
    fn window_matches_default_size() {
        let settings = window_settings();
        assert_eq!(settings.size.width, 800.0);
        assert_eq!(settings.size.height, 500.0);
    }

    #[test]
    fn title_shows_app_name_without_image() {
        let dir = tempdir().expect("temp dir");
        let app = app_with(isolated_flags(dir.path()));
        assert_eq!(app.title(), "Iced Pivot");
    }

    #[test]
    fn startup_file_is_opened_and_named_in_title() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("photo.png");
        RgbaImage::from_pixel(5, 5, Rgba([0, 0, 0, 255]))
            .save(&path)
            .expect("write png");

        let mut flags = isolated_flags(dir.path());
        flags.file_path = Some(path.to_string_lossy().into_owned());
        let app = app_with(flags);

        assert!(app.image_editor.has_image());
        assert_eq!(app.title(), "photo.png - Iced Pivot");
    }

    #[test]
    fn unsupported_startup_file_warns() {
        let dir = tempdir().expect("temp dir");
        let mut flags = isolated_flags(dir.path());
        flags.file_path = Some(dir.path().join("notes.txt").to_string_lossy().into_owned());
        let app = app_with(flags);

        assert!(!app.image_editor.has_image());
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-unsupported-file"));
    }

    #[test]
    fn notification_dismiss_message_is_routed() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with(isolated_flags(dir.path()));
        app.notifications
            .push(notifications::Notification::error("notification-save-error"));
        let id = app
            .notifications
            .visible()
            .next()
            .map(|n| n.id())
            .expect("toast visible");

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications.has_notifications());
    }
}
