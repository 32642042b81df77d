// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::image_editor::{self, State as ImageEditorState};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image_editor: &'a ImageEditorState,
    pub notifications: &'a Manager,
}

/// Renders the editor with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let editor = ctx
        .image_editor
        .view(image_editor::ViewContext { i18n: ctx.i18n })
        .map(Message::ImageEditor);

    let content = Container::new(editor)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
