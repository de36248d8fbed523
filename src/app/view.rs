// SPDX-License-Identifier: MPL-2.0
//! Root view: the active screen with the toast overlay on top.

use super::{Message, Screen};
use crate::diagnostics::DiagnosticEvent;
use crate::i18n::fluent::I18n;
use crate::media::navigator::NavigationInfo;
use crate::media::ImageDetails;
use crate::ui::navbar::{self, Menu};
use crate::ui::notifications::{self, Toast};
use crate::ui::{about, activity_log, details, help, viewer};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub viewer: &'a viewer::State,
    pub navigation: NavigationInfo,
    pub open_menu: Option<Menu>,
    pub help_state: &'a help::State,
    pub details: Option<&'a ImageDetails>,
    pub activity_events: &'a [DiagnosticEvent],
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen_content: Element<'_, Message> = match ctx.screen {
        Screen::Viewer => view_viewer(&ctx),
        Screen::Details => details::view(details::ViewContext {
            i18n: ctx.i18n,
            details: ctx.details,
        })
        .map(Message::Details),
        Screen::ActivityLog => activity_log::view(activity_log::ViewContext {
            i18n: ctx.i18n,
            events: ctx.activity_events,
        })
        .map(Message::ActivityLog),
        Screen::Help => help::view(help::ViewContext {
            i18n: ctx.i18n,
            state: ctx.help_state,
        })
        .map(Message::Help),
        Screen::About => about::view(about::ViewContext { i18n: ctx.i18n }).map(Message::About),
    };

    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(screen_content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(overlay)
        .into()
}

fn view_viewer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        open_menu: ctx.open_menu,
        has_image: ctx.viewer.has_image(),
    })
    .map(Message::Navbar);

    let viewer = viewer::component::view(
        ctx.viewer,
        viewer::ViewContext {
            i18n: ctx.i18n,
            navigation: ctx.navigation,
        },
    )
    .map(Message::Viewer);

    Column::new().push(navbar).push(viewer).into()
}
