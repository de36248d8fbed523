// SPDX-License-Identifier: MPL-2.0
//! Menu bar shown above the viewer.
//!
//! Three menus (File, Edit, Info) open as dropdowns below the bar. At most one
//! dropdown is open at a time; choosing an item closes it.

use crate::i18n::fluent::I18n;
use crate::media::Transform;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Edit,
    Info,
}

impl Menu {
    const ALL: [Menu; 3] = [Menu::File, Menu::Edit, Menu::Info];

    fn label_key(self) -> &'static str {
        match self {
            Menu::File => "menu-file",
            Menu::Edit => "menu-edit",
            Menu::Info => "menu-info",
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub open_menu: Option<Menu>,
    /// Enables Save, the Edit menu and Image Details.
    pub has_image: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu(Menu),
    CloseMenu,
    OpenImage,
    OpenFolder,
    SaveImage,
    Quit,
    Transform(Transform),
    OpenDetails,
    OpenActivityLog,
    OpenAbout,
    OpenHelp,
}

/// What the application must do after a menu choice.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenImage,
    OpenFolder,
    SaveImage,
    Quit,
    Transform(Transform),
    OpenDetails,
    OpenActivityLog,
    OpenAbout,
    OpenHelp,
}

pub fn update(message: Message, open_menu: &mut Option<Menu>) -> Event {
    let event = match message {
        Message::ToggleMenu(menu) => {
            *open_menu = if *open_menu == Some(menu) {
                None
            } else {
                Some(menu)
            };
            return Event::None;
        }
        Message::CloseMenu => Event::None,
        Message::OpenImage => Event::OpenImage,
        Message::OpenFolder => Event::OpenFolder,
        Message::SaveImage => Event::SaveImage,
        Message::Quit => Event::Quit,
        Message::Transform(transform) => Event::Transform(transform),
        Message::OpenDetails => Event::OpenDetails,
        Message::OpenActivityLog => Event::OpenActivityLog,
        Message::OpenAbout => Event::OpenAbout,
        Message::OpenHelp => Event::OpenHelp,
    };
    *open_menu = None;
    event
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_bar(&ctx));

    if let Some(menu) = ctx.open_menu {
        content = content.push(build_dropdown(&ctx, menu));
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XXS, spacing::SM])
        .align_y(Vertical::Center);

    for menu in Menu::ALL {
        let selected = ctx.open_menu == Some(menu);
        row = row.push(
            button(Text::new(ctx.i18n.tr(menu.label_key())).size(typography::BODY))
                .on_press(Message::ToggleMenu(menu))
                .padding([spacing::XXS, spacing::SM])
                .style(move |theme: &Theme, status| bar_button_style(theme, status, selected)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>, menu: Menu) -> Element<'a, Message> {
    let tr = |key: &str| ctx.i18n.tr(key);
    let has_image = ctx.has_image;

    let items: Vec<Element<'a, Message>> = match menu {
        Menu::File => vec![
            menu_item(tr("menu-file-open-image"), "Ctrl+O", Some(Message::OpenImage)),
            menu_item(
                tr("menu-file-open-folder"),
                "Ctrl+Shift+O",
                Some(Message::OpenFolder),
            ),
            menu_item(
                tr("menu-file-save-image"),
                "Ctrl+S",
                has_image.then_some(Message::SaveImage),
            ),
            menu_item(tr("menu-file-quit"), "", Some(Message::Quit)),
        ],
        Menu::Edit => Transform::ALL
            .iter()
            .map(|&transform| {
                menu_item(
                    tr(transform.label_key()),
                    transform_shortcut(transform),
                    has_image.then_some(Message::Transform(transform)),
                )
            })
            .collect(),
        Menu::Info => vec![
            menu_item(
                tr("menu-info-details"),
                "I",
                has_image.then_some(Message::OpenDetails),
            ),
            menu_item(
                tr("menu-info-activity-log"),
                "",
                Some(Message::OpenActivityLog),
            ),
            menu_item(tr("menu-info-about"), "", Some(Message::OpenAbout)),
            menu_item(tr("menu-info-help"), "F1", Some(Message::OpenHelp)),
        ],
    };

    let menu_column = Column::with_children(items)
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::MENU_WIDTH));

    let dropdown = Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        });

    Row::new()
        .push(Space::new().width(Length::Fixed(spacing::SM)))
        .push(dropdown)
        .into()
}

fn transform_shortcut(transform: Transform) -> &'static str {
    match transform {
        Transform::RotateClockwise => "R",
        Transform::RotateCounterClockwise => "Shift+R",
        Transform::FlipHorizontal => "H",
        Transform::FlipVertical => "V",
    }
}

/// A disabled item is rendered when `message` is `None`.
fn menu_item<'a>(
    label: String,
    shortcut: &'static str,
    message: Option<Message>,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(label).width(Length::Fill))
        .push(
            Text::new(shortcut)
                .size(typography::CAPTION)
                .align_x(Horizontal::Right),
        );

    button(row)
        .on_press_maybe(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

fn bar_button_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let palette = theme.extended_palette();
    let background = match (status, selected) {
        (_, true) | (button::Status::Pressed, _) => Some(palette.background.strong.color.into()),
        (button::Status::Hovered, _) => Some(palette.background.strong.color.into()),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.strong.color,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_each_menu() {
        let i18n = I18n::default();
        for open_menu in [None, Some(Menu::File), Some(Menu::Edit), Some(Menu::Info)] {
            for has_image in [false, true] {
                let _element = view(ViewContext {
                    i18n: &i18n,
                    open_menu,
                    has_image,
                });
            }
        }
    }

    #[test]
    fn toggle_menu_opens_and_closes() {
        let mut open_menu = None;
        assert_eq!(update(Message::ToggleMenu(Menu::File), &mut open_menu), Event::None);
        assert_eq!(open_menu, Some(Menu::File));

        update(Message::ToggleMenu(Menu::Edit), &mut open_menu);
        assert_eq!(open_menu, Some(Menu::Edit));

        update(Message::ToggleMenu(Menu::Edit), &mut open_menu);
        assert_eq!(open_menu, None);
    }

    #[test]
    fn menu_items_close_menu_and_emit_event() {
        let mut open_menu = Some(Menu::Edit);
        let event = update(
            Message::Transform(Transform::FlipVertical),
            &mut open_menu,
        );
        assert_eq!(event, Event::Transform(Transform::FlipVertical));
        assert!(open_menu.is_none());

        open_menu = Some(Menu::Info);
        assert_eq!(update(Message::OpenActivityLog, &mut open_menu), Event::OpenActivityLog);
        assert!(open_menu.is_none());

        open_menu = Some(Menu::File);
        assert_eq!(update(Message::CloseMenu, &mut open_menu), Event::None);
        assert!(open_menu.is_none());
    }

    #[test]
    fn every_transform_has_a_shortcut() {
        for transform in Transform::ALL {
            assert!(!transform_shortcut(transform).is_empty());
        }
    }
}
