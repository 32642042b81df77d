// SPDX-License-Identifier: MPL-2.0
//! Editor screen: toolbar, preview, angle dial and the resize/flip dialogs.
//!
//! This module follows a "state down, messages up" pattern. The screen owns
//! the [`EditorSession`] and the [`AngleDial`]; anything that needs the
//! outside world (file pickers, toasts) is returned to the application as an
//! [`Event`].

use crate::domain::editing::FlipAxis;
use crate::editor::{EditorSession, SaveOutcome, SessionOptions};
use crate::media::image_transform::dynamic_to_image_data;
use crate::media::ImageData;
use crate::ui::angle_dial::AngleDial;
use crate::ui::notifications::Notification;
use std::path::Path;

mod messages;
mod state;
mod view;

pub use messages::{Event, FlipFormMessage, Message, ResizeFormMessage, ToolbarMessage};
pub use state::{Dialog, FlipForm, ResizeForm};
pub use view::ViewContext;

/// Display and processing settings taken from `[editor]` in the config.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub dial_size: f32,
    pub preview_max_size: u32,
    pub session: SessionOptions,
}

/// Local UI state for the editor screen.
#[derive(Debug, Clone)]
pub struct State {
    session: EditorSession,
    dial: AngleDial,
    dialog: Option<Dialog>,
    /// Last image produced by load or a transform.
    preview: Option<ImageData>,
    preview_max_size: u32,
}

impl State {
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            session: EditorSession::with_options(settings.session),
            dial: AngleDial::new(settings.dial_size),
            dialog: None,
            preview: None,
            preview_max_size: settings.preview_max_size,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
            Message::ResizeForm(msg) => self.handle_resize_form_message(msg),
            Message::FlipForm(msg) => self.handle_flip_form_message(msg),
            Message::Dial(msg) => {
                self.dial.update(msg);
                Event::None
            }
            Message::DismissDialog => {
                self.dialog = None;
                Event::None
            }
        }
    }

    /// Loads the file picked in the open dialog. An empty path is a cancel.
    pub fn open(&mut self, path: &Path) -> Event {
        match self.session.load(path) {
            Ok(Some(image)) => {
                let data = dynamic_to_image_data(image);
                self.preview = Some(data);
                self.dialog = None;
                Event::None
            }
            Ok(None) => Event::None,
            Err(err) => {
                log::warn!("Failed to load {}: {err}", path.display());
                Event::Notify(Notification::error(err.i18n_key()).with_arg("error", err.to_string()))
            }
        }
    }

    /// Writes the export to the path picked in the save dialog.
    pub fn save(&self, path: &Path) -> Event {
        match self.session.save(path) {
            Ok(SaveOutcome::Saved(_)) => Event::Notify(Notification::success("notification-save-success")),
            Ok(SaveOutcome::Skipped) => Event::None,
            Err(err) => {
                log::warn!("Failed to save {}: {err}", path.display());
                Event::Notify(Notification::error(err.i18n_key()).with_arg("error", err.to_string()))
            }
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn dial(&self) -> &AngleDial {
        &self.dial
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn preview(&self) -> Option<&ImageData> {
        self.preview.as_ref()
    }

    pub fn preview_max_size(&self) -> u32 {
        self.preview_max_size
    }

    pub fn has_image(&self) -> bool {
        self.session.is_loaded()
    }

    fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Event {
        match message {
            ToolbarMessage::Load => Event::OpenRequested,
            ToolbarMessage::OpenResize => {
                if self.has_image() {
                    self.dialog = Some(Dialog::Resize(ResizeForm::new()));
                } else {
                    log::debug!("Resize dialog not opened: no image loaded");
                }
                Event::None
            }
            ToolbarMessage::Rotate => {
                let angle = self.dial.value();
                let rotated = self.session.request_rotate(angle).map(dynamic_to_image_data);
                if rotated.is_some() {
                    self.preview = rotated;
                }
                Event::None
            }
            ToolbarMessage::OpenFlip => {
                if self.has_image() {
                    self.dialog = Some(Dialog::Flip(FlipForm::default()));
                } else {
                    log::debug!("Flip dialog not opened: no image loaded");
                }
                Event::None
            }
            ToolbarMessage::Save => {
                if self.has_image() {
                    Event::SaveRequested
                } else {
                    log::debug!("Save dialog not opened: no image loaded");
                    Event::None
                }
            }
        }
    }

    fn handle_resize_form_message(&mut self, message: ResizeFormMessage) -> Event {
        let Some(Dialog::Resize(form)) = self.dialog.as_mut() else {
            return Event::None;
        };

        match message {
            ResizeFormMessage::WidthChanged(value) => {
                form.set_width(value);
                Event::None
            }
            ResizeFormMessage::HeightChanged(value) => {
                form.set_height(value);
                Event::None
            }
            ResizeFormMessage::Submit => match form.validate() {
                Ok(dimensions) => {
                    self.dialog = None;
                    let resized = self.session.request_resize(dimensions).map(dynamic_to_image_data);
                    if resized.is_some() {
                        self.preview = resized;
                    }
                    Event::None
                }
                Err(err) => Event::Notify(Notification::error(err.i18n_key())),
            },
            ResizeFormMessage::Cancel => {
                self.dialog = None;
                Event::None
            }
        }
    }

    fn handle_flip_form_message(&mut self, message: FlipFormMessage) -> Event {
        let Some(Dialog::Flip(form)) = self.dialog.as_mut() else {
            return Event::None;
        };

        match message {
            FlipFormMessage::Select(axis) => {
                form.selected = Some(axis);
            }
            FlipFormMessage::Apply => {
                let choice: Option<FlipAxis> = form.selected;
                self.dialog = None;
                let flipped = self.session.request_flip(choice).map(dynamic_to_image_data);
                if flipped.is_some() {
                    self.preview = flipped;
                }
            }
            FlipFormMessage::Cancel => {
                self.dialog = None;
            }
        }
        Event::None
    }

    /// Renders the editor.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> iced::Element<'a, Message> {
        view::render(self, ctx)
    }
}
