// SPDX-License-Identifier: MPL-2.0
//! Image details screen.

use crate::i18n::fluent::I18n;
use crate::media::details::format_file_size;
use crate::media::ImageDetails;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, scrollable, text, Column, Row, Text},
    Border, Element, Font, Length, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// `None` when no image is open.
    pub details: Option<&'a ImageDetails>,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToViewer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToViewer,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToViewer => Event::BackToViewer,
    }
}

/// Label/value pairs in display order.
fn rows(i18n: &I18n, details: &ImageDetails) -> Vec<(String, String)> {
    let unknown = || i18n.tr("details-unknown");
    vec![
        (i18n.tr("details-file-name"), details.file_name.clone()),
        (i18n.tr("details-path"), details.path.display().to_string()),
        (i18n.tr("details-format"), details.format.clone()),
        (i18n.tr("details-dimensions"), details.dimensions_label()),
        (i18n.tr("details-color-mode"), details.color_mode.clone()),
        (
            i18n.tr("details-file-size"),
            details.file_size.map_or_else(unknown, format_file_size),
        ),
        (
            i18n.tr("details-modified"),
            details.modified_label().unwrap_or_else(unknown),
        ),
    ]
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("back-to-viewer-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToViewer);

    let title = Text::new(ctx.i18n.tr("details-title")).size(typography::TITLE_LG);

    let body: Element<'_, Message> = match ctx.details {
        Some(details) => rows(ctx.i18n, details)
            .into_iter()
            .fold(Column::new().spacing(spacing::SM), |column, (label, value)| {
                column.push(
                    Row::new()
                        .spacing(spacing::MD)
                        .align_y(Vertical::Top)
                        .push(
                            Text::new(label)
                                .size(typography::BODY)
                                .width(Length::Fixed(sizing::DETAILS_LABEL_WIDTH))
                                .font(Font {
                                    weight: Weight::Bold,
                                    ..Font::default()
                                }),
                        )
                        .push(Text::new(value).size(typography::BODY).width(Length::Fill)),
                )
            })
            .into(),
        None => Text::new(ctx.i18n.tr("details-no-image"))
            .size(typography::BODY)
            .into(),
    };

    let card = container(body)
        .padding(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(card);

    scrollable(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_details() -> ImageDetails {
        ImageDetails {
            file_name: "cat.png".into(),
            path: PathBuf::from("/photos/cat.png"),
            format: "PNG".into(),
            width: 640,
            height: 480,
            color_mode: "RGBA, 8-bit".into(),
            file_size: Some(2048),
            modified: None,
        }
    }

    #[test]
    fn details_view_renders_with_and_without_image() {
        let i18n = I18n::default();
        let details = sample_details();
        let _element = view(ViewContext {
            i18n: &i18n,
            details: Some(&details),
        });
        let _empty = view(ViewContext {
            i18n: &i18n,
            details: None,
        });
    }

    #[test]
    fn rows_cover_every_field() {
        let i18n = I18n::default();
        let rows = rows(&i18n, &sample_details());
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].1, "cat.png");
        assert_eq!(rows[3].1, "640 × 480");
        assert_eq!(rows[5].1, format_file_size(2048));
        assert_eq!(rows[6].1, i18n.tr("details-unknown"));
    }

    #[test]
    fn back_to_viewer_emits_event() {
        assert_eq!(update(&Message::BackToViewer), Event::BackToViewer);
    }
}
