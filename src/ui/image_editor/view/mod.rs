// SPDX-License-Identifier: MPL-2.0
//! Editor view composition helpers.

pub mod dialogs;
pub mod preview;
pub mod toolbar;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{container, Row};
use iced::{Alignment, Element, Length};

use super::{Message, State};

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let preview = preview::view(state.preview(), state.preview_max_size(), &ctx);
    let toolbar = toolbar::view(state, &ctx);

    let content = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_y(Alignment::Start)
        .push(preview)
        .push(toolbar);

    let base = container(content).width(Length::Fill).height(Length::Fill);

    match state.dialog() {
        Some(dialog) => dialogs::modal(base.into(), dialogs::view(dialog, &ctx)),
        None => base.into(),
    }
}
