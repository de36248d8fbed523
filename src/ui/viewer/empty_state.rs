// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown while no image is open.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("menu-file-open-image")))
                .padding([spacing::SM, spacing::LG])
                .style(button::primary)
                .on_press(Message::OpenImageRequested),
        )
        .push(
            button(Text::new(i18n.tr("menu-file-open-folder")))
                .padding([spacing::SM, spacing::LG])
                .style(button::secondary)
                .on_press(Message::OpenFolderRequested),
        );

    let drop_hint = Text::new(i18n.tr("empty-state-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(buttons)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
