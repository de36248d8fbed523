// SPDX-License-Identifier: MPL-2.0
//! Help screen with collapsible sections.
//!
//! Each section explains one part of the viewer and lists its keyboard
//! shortcuts. All sections start collapsed.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, scrollable, text, Column, Container, Row, Text},
    Border, Element, Font, Length, Theme,
};
use std::collections::HashSet;

const KEY_BADGE_WIDTH: f32 = 110.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpSection {
    Navigation,
    Transforms,
    Saving,
    Formats,
}

impl HelpSection {
    pub const ALL: [HelpSection; 4] = [
        HelpSection::Navigation,
        HelpSection::Transforms,
        HelpSection::Saving,
        HelpSection::Formats,
    ];

    fn title_key(self) -> &'static str {
        match self {
            HelpSection::Navigation => "help-section-navigation",
            HelpSection::Transforms => "help-section-transforms",
            HelpSection::Saving => "help-section-saving",
            HelpSection::Formats => "help-section-formats",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<HelpSection>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_expanded(&self, section: HelpSection) -> bool {
        self.expanded.contains(&section)
    }

    pub fn toggle(&mut self, section: HelpSection) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToViewer,
    ToggleSection(HelpSection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToViewer,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::BackToViewer => Event::BackToViewer,
        Message::ToggleSection(section) => {
            state.toggle(section);
            Event::None
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("back-to-viewer-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToViewer);

    let title = Text::new(ctx.i18n.tr("help-title")).size(typography::TITLE_LG);

    let content = HelpSection::ALL.into_iter().fold(
        Column::new()
            .width(Length::Fill)
            .spacing(spacing::SM)
            .align_x(Horizontal::Left)
            .padding(spacing::MD)
            .push(back_button)
            .push(title),
        |column, section| column.push(build_collapsible_section(&ctx, section)),
    );

    scrollable(content).into()
}

fn build_collapsible_section<'a>(
    ctx: &ViewContext<'a>,
    section: HelpSection,
) -> Element<'a, Message> {
    let is_expanded = ctx.state.is_expanded(section);
    let indicator = Text::new(if is_expanded { "▼" } else { "▶" }).size(typography::BODY);

    let header_content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(indicator)
        .push(Text::new(ctx.i18n.tr(section.title_key())).size(typography::TITLE_SM));

    let header = button(header_content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(|theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
                _ => palette.background.weak.color,
            };
            button::Style {
                background: Some(background.into()),
                text_color: palette.background.base.text,
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(Message::ToggleSection(section));

    let mut section_column = Column::new().spacing(spacing::XS).push(header);

    if is_expanded {
        let content = match section {
            HelpSection::Navigation => build_navigation_content(ctx),
            HelpSection::Transforms => build_transforms_content(ctx),
            HelpSection::Saving => build_saving_content(ctx),
            HelpSection::Formats => build_paragraph(ctx.i18n.tr("help-formats-body")),
        };
        section_column = section_column.push(
            Container::new(content)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(|theme: &Theme| container::Style {
                    background: Some(theme.extended_palette().background.weak.color.into()),
                    border: Border {
                        radius: radius::MD.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }

    section_column.into()
}

fn build_navigation_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tr = |key: &str| ctx.i18n.tr(key);
    Column::new()
        .spacing(spacing::SM)
        .push(build_paragraph(tr("help-navigation-role")))
        .push(build_subsection_title(tr("help-shortcuts-title")))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(build_shortcut_row("← / →", tr("help-key-navigate")))
                .push(build_shortcut_row("Ctrl+O", tr("help-key-open-image")))
                .push(build_shortcut_row("Ctrl+Shift+O", tr("help-key-open-folder")))
                .push(build_shortcut_row("I", tr("help-key-details")))
                .push(build_shortcut_row("F1", tr("help-key-help")))
                .push(build_shortcut_row("Esc", tr("help-key-back"))),
        )
        .push(build_paragraph(tr("help-navigation-skip")))
        .into()
}

fn build_transforms_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tr = |key: &str| ctx.i18n.tr(key);
    Column::new()
        .spacing(spacing::SM)
        .push(build_paragraph(tr("help-transforms-role")))
        .push(build_subsection_title(tr("help-shortcuts-title")))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(build_shortcut_row("R", tr("menu-edit-rotate-cw")))
                .push(build_shortcut_row("Shift+R", tr("menu-edit-rotate-ccw")))
                .push(build_shortcut_row("H", tr("menu-edit-flip-horizontal")))
                .push(build_shortcut_row("V", tr("menu-edit-flip-vertical"))),
        )
        .push(build_paragraph(tr("help-transforms-modified")))
        .into()
}

fn build_saving_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tr = |key: &str| ctx.i18n.tr(key);
    Column::new()
        .spacing(spacing::SM)
        .push(build_paragraph(tr("help-saving-role")))
        .push(build_shortcut_row("Ctrl+S", tr("help-key-save")))
        .push(build_paragraph(tr("help-saving-formats")))
        .into()
}

fn build_paragraph<'a>(content: String) -> Element<'a, Message> {
    Text::new(content).size(typography::BODY).into()
}

fn build_subsection_title<'a>(title: String) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::BODY_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .into()
}

fn build_shortcut_row<'a>(key: &'a str, description: String) -> Element<'a, Message> {
    let key_badge = Container::new(Text::new(key).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(key_badge).width(Length::Fixed(KEY_BADGE_WIDTH)))
        .push(Text::new(description).size(typography::BODY))
        .into()
}
