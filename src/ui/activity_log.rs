// SPDX-License-Identifier: MPL-2.0
//! Activity log screen listing recent user actions, warnings and errors.

use crate::diagnostics::{DiagnosticEvent, DiagnosticEventKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, scrollable, text, Column, Row, Space, Text},
    Border, Color, Element, Length, Theme,
};

const TIME_COLUMN_WIDTH: f32 = 72.0;
const KIND_COLUMN_WIDTH: f32 = 90.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Newest first.
    pub events: &'a [DiagnosticEvent],
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToViewer,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToViewer,
    Clear,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToViewer => Event::BackToViewer,
        Message::Clear => Event::Clear,
    }
}

fn kind_color(kind: &DiagnosticEventKind) -> Option<Color> {
    match kind {
        DiagnosticEventKind::UserAction { .. } => None,
        DiagnosticEventKind::Warning { .. } => Some(palette::WARNING_500),
        DiagnosticEventKind::Error { .. } => Some(palette::ERROR_500),
    }
}

/// Kind label and message for one event.
fn describe(i18n: &I18n, kind: &DiagnosticEventKind) -> (String, String) {
    match kind {
        DiagnosticEventKind::UserAction { action, details } => {
            let label = i18n.tr(action.label_key());
            let message = match details {
                Some(details) => format!("{label}: {details}"),
                None => label,
            };
            (i18n.tr("activity-kind-action"), message)
        }
        DiagnosticEventKind::Warning { message } => {
            (i18n.tr("activity-kind-warning"), message.clone())
        }
        DiagnosticEventKind::Error { message } => (i18n.tr("activity-kind-error"), message.clone()),
    }
}

fn build_event_row<'a>(i18n: &I18n, event: &DiagnosticEvent) -> Element<'a, Message> {
    let (kind_label, message) = describe(i18n, &event.kind);
    let accent = kind_color(&event.kind);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Top)
        .push(
            Text::new(event.time_label())
                .size(typography::CAPTION)
                .width(Length::Fixed(TIME_COLUMN_WIDTH)),
        )
        .push(
            Text::new(kind_label)
                .size(typography::CAPTION)
                .width(Length::Fixed(KIND_COLUMN_WIDTH))
                .style(move |theme: &Theme| text::Style {
                    color: Some(accent.unwrap_or(theme.palette().text)),
                }),
        )
        .push(
            Text::new(message)
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .into()
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("back-to-viewer-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToViewer);

    let clear_button = button(text(ctx.i18n.tr("activity-clear-button")).size(typography::BODY))
        .on_press_maybe((!ctx.events.is_empty()).then_some(Message::Clear));

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(back_button)
        .push(Space::new().width(Length::Fill))
        .push(clear_button);

    let title = Text::new(ctx.i18n.tr("activity-title")).size(typography::TITLE_LG);

    let count = ctx.events.len().to_string();
    let summary = Text::new(
        ctx.i18n
            .tr_with_args("activity-event-count", &[("count", &count)]),
    )
    .size(typography::BODY);

    let list: Element<'_, Message> = if ctx.events.is_empty() {
        Text::new(ctx.i18n.tr("activity-empty"))
            .size(typography::BODY)
            .into()
    } else {
        ctx.events
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, event| {
                column.push(build_event_row(ctx.i18n, event))
            })
            .into()
    };

    let list_container = container(list)
        .padding(spacing::MD)
        .width(Length::Fill)
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
        .push(header)
        .push(title)
        .push(summary)
        .push(list_container);

    scrollable(content).into()
}
