// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::image_editor;
use crate::ui::notifications;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ImageEditor(image_editor::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog; `None` when cancelled.
    OpenDialogResult(Option<PathBuf>),
    /// Result from the save file dialog; `None` when cancelled.
    SaveDialogResult(Option<PathBuf>),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override, e.g. `fr`.
    pub lang: Option<String>,
    /// Image to open on startup.
    pub file_path: Option<String>,
    /// Directory holding `settings.toml`.
    pub config_dir: Option<String>,
}
