// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::domain::editing::FlipAxis;
use crate::ui::angle_dial;
use crate::ui::notifications::Notification;

/// Toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarMessage {
    Load,
    OpenResize,
    Rotate,
    OpenFlip,
    Save,
}

/// Resize dialog input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeFormMessage {
    WidthChanged(String),
    HeightChanged(String),
    Submit,
    Cancel,
}

/// Flip dialog input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipFormMessage {
    Select(FlipAxis),
    Apply,
    Cancel,
}

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Toolbar(ToolbarMessage),
    ResizeForm(ResizeFormMessage),
    FlipForm(FlipFormMessage),
    Dial(angle_dial::Message),
    /// Click outside the open dialog.
    DismissDialog,
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<ResizeFormMessage> for Message {
    fn from(message: ResizeFormMessage) -> Self {
        Message::ResizeForm(message)
    }
}

impl From<FlipFormMessage> for Message {
    fn from(message: FlipFormMessage) -> Self {
        Message::FlipForm(message)
    }
}

impl From<angle_dial::Message> for Message {
    fn from(message: angle_dial::Message) -> Self {
        Message::Dial(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Show the open-file picker.
    OpenRequested,
    /// Show the save-file picker.
    SaveRequested,
    /// Show a toast.
    Notify(Notification),
}
