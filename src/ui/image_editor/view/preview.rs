// SPDX-License-Identifier: MPL-2.0
//! Square preview area showing the last produced image.

use crate::media::image_transform::fit_within;
use crate::media::ImageData;
use crate::ui::design_tokens::{border, palette, typography};
use iced::widget::{center, container, image, text};
use iced::{Background, Element, Length, Theme};

use super::super::Message;
use super::ViewContext;

pub fn view<'a>(
    preview: Option<&'a ImageData>,
    max_side: u32,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    #[allow(clippy::cast_precision_loss)]
    let side = max_side as f32;

    let content: Element<'a, Message> = match preview {
        Some(data) => {
            let (width, height) = fit_within(data.width, data.height, max_side);
            #[allow(clippy::cast_precision_loss)]
            let widget = image(data.handle.clone())
                .width(Length::Fixed(width as f32))
                .height(Length::Fixed(height as f32))
                .content_fit(iced::ContentFit::Fill);
            container(widget).width(Length::Fill).height(Length::Fill).into()
        }
        None => center(text(ctx.i18n.tr("editor-empty-preview")).size(typography::BODY)).into(),
    };

    container(content)
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::WHITE)),
            text_color: Some(palette::GRAY_700),
            border: iced::Border {
                color: palette::GRAY_200,
                width: border::WIDTH_SM,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}
