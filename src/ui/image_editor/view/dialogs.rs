// SPDX-License-Identifier: MPL-2.0
//! Resize and flip dialogs, drawn as modals over the editor.

use crate::domain::editing::FlipAxis;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::theming;
use iced::widget::{
    button, center, container, mouse_area, opaque, radio, text, text_input, Column, Row, Stack,
};
use iced::{Alignment, Background, Element, Length, Theme};

use super::super::{Dialog, FlipForm, FlipFormMessage, Message, ResizeForm, ResizeFormMessage};
use super::ViewContext;

pub fn view<'a>(dialog: &'a Dialog, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match dialog {
        Dialog::Resize(form) => resize(form, ctx),
        Dialog::Flip(form) => flip(form, ctx),
    }
}

/// Lays `dialog` over `base`; clicking the backdrop cancels.
pub fn modal<'a>(base: Element<'a, Message>, dialog: Element<'a, Message>) -> Element<'a, Message> {
    let backdrop = center(opaque(dialog)).style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(theming::modal_backdrop())),
        ..Default::default()
    });

    Stack::new()
        .push(base)
        .push(opaque(mouse_area(backdrop).on_press(Message::DismissDialog)))
        .into()
}

fn card<'a>(title: String, body: Column<'a, Message>) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::MD)
            .push(text(title).size(typography::TITLE_SM))
            .push(body),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(|theme: &Theme| container::Style {
        background: Some(Background::Color(theme.extended_palette().background.base.color)),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    })
    .into()
}

fn buttons<'a>(confirm: String, on_confirm: Message, cancel: String, on_cancel: Message) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(button(text(confirm).size(typography::BODY)).on_press(on_confirm))
        .push(
            button(text(cancel).size(typography::BODY))
                .on_press(on_cancel)
                .style(button::secondary),
        )
}

fn resize<'a>(form: &'a ResizeForm, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let labelled_input = |label: String, value: &'a str, on_input: fn(String) -> ResizeFormMessage| {
        Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(
                text(label)
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::DIALOG_LABEL_WIDTH)),
            )
            .push(
                text_input("", value)
                    .on_input(move |v| Message::ResizeForm(on_input(v)))
                    .on_submit(Message::ResizeForm(ResizeFormMessage::Submit))
                    .padding(spacing::XXS)
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
    };

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(labelled_input(
            i18n.tr("resize-dialog-width-label"),
            &form.width_input,
            ResizeFormMessage::WidthChanged,
        ))
        .push(labelled_input(
            i18n.tr("resize-dialog-height-label"),
            &form.height_input,
            ResizeFormMessage::HeightChanged,
        ));

    if let Some(error) = form.error {
        body = body.push(
            text(i18n.tr(error.i18n_key()))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    body = body.push(buttons(
        i18n.tr("resize-dialog-confirm"),
        Message::ResizeForm(ResizeFormMessage::Submit),
        i18n.tr("dialog-cancel"),
        Message::ResizeForm(ResizeFormMessage::Cancel),
    ));

    card(i18n.tr("resize-dialog-title"), body)
}

fn flip<'a>(form: &'a FlipForm, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let option = |label: String, axis: FlipAxis| {
        radio(label, axis, form.selected, |choice| {
            Message::FlipForm(FlipFormMessage::Select(choice))
        })
        .size(typography::BODY)
    };

    let body = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("flip-dialog-prompt")).size(typography::BODY))
        .push(option(i18n.tr("flip-dialog-horizontal"), FlipAxis::Horizontal))
        .push(option(i18n.tr("flip-dialog-vertical"), FlipAxis::Vertical))
        .push(buttons(
            i18n.tr("flip-dialog-confirm"),
            Message::FlipForm(FlipFormMessage::Apply),
            i18n.tr("dialog-cancel"),
            Message::FlipForm(FlipFormMessage::Cancel),
        ));

    card(i18n.tr("flip-dialog-title"), body)
}
