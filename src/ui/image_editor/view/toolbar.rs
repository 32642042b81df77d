// SPDX-License-Identifier: MPL-2.0
//! Column of editor actions with the angle dial beside the Rotate button.

use crate::ui::angle_dial::DialRenderer;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, canvas, Column, Row, Text};
use iced::{Alignment, Element, Length};

use super::super::{Message, State, ToolbarMessage};
use super::ViewContext;

fn action<'a>(label: String, message: ToolbarMessage) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::Toolbar(message))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fixed(sizing::TOOLBAR_BUTTON_WIDTH))
        .into()
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let dial_size = state.dial().size();

    let dial: Element<'a, Message> = Element::from(
        canvas(DialRenderer::new(state.dial()))
            .width(Length::Fixed(dial_size))
            .height(Length::Fixed(dial_size)),
    )
    .map(Message::Dial);

    let rotate_row = Row::new()
        .spacing(spacing::LG)
        .align_y(Alignment::Center)
        .push(action(i18n.tr("editor-rotate-button"), ToolbarMessage::Rotate))
        .push(dial);

    Column::new()
        .spacing(spacing::SM)
        .push(action(i18n.tr("editor-load-button"), ToolbarMessage::Load))
        .push(action(i18n.tr("editor-resize-button"), ToolbarMessage::OpenResize))
        .push(rotate_row)
        .push(action(i18n.tr("editor-flip-button"), ToolbarMessage::OpenFlip))
        .push(action(i18n.tr("editor-save-button"), ToolbarMessage::Save))
        .into()
}
