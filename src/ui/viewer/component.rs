// SPDX-License-Identifier: MPL-2.0
//! Viewer state and rendering.
//!
//! The viewer exclusively owns the decoded buffer on display. Loading a new
//! image or applying a transform replaces it wholesale, releasing the
//! previous one. The accumulated [`Orientation`] records how the buffer
//! differs from the file on disk.

use super::empty_state;
use crate::i18n::fluent::I18n;
use crate::media::navigator::{Direction, NavigationInfo};
use crate::media::{ImageData, Orientation, Transform};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::scrollable::{self, Scrollbar};
use iced::widget::{button, Column, Container, Image, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Message {
    NavigatePrevious,
    NavigateNext,
    OpenImageRequested,
    OpenFolderRequested,
}

/// Work the application must do on behalf of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Navigate(Direction),
    OpenImage,
    OpenFolder,
}

#[must_use]
pub fn update(message: &Message) -> Effect {
    match message {
        Message::NavigatePrevious => Effect::Navigate(Direction::Previous),
        Message::NavigateNext => Effect::Navigate(Direction::Next),
        Message::OpenImageRequested => Effect::OpenImage,
        Message::OpenFolderRequested => Effect::OpenFolder,
    }
}

#[derive(Debug, Clone)]
pub struct State {
    image: Option<ImageData>,
    /// File the buffer was decoded from.
    path: Option<PathBuf>,
    orientation: Orientation,
    fit_to_window: bool,
    is_loading: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            image: None,
            path: None,
            orientation: Orientation::IDENTITY,
            fit_to_window: true,
            is_loading: false,
        }
    }
}

impl State {
    #[must_use]
    pub fn new(fit_to_window: bool) -> Self {
        Self {
            fit_to_window,
            ..Self::default()
        }
    }

    /// Shows a freshly decoded image. Unsaved transforms are discarded.
    pub fn set_image(&mut self, path: PathBuf, image: ImageData) {
        self.image = Some(image);
        self.path = Some(path);
        self.orientation = Orientation::IDENTITY;
        self.is_loading = false;
    }

    /// Replaces the buffer with its transformed version.
    ///
    /// Returns `false` when no image is shown.
    pub fn apply_transform(&mut self, transform: Transform) -> bool {
        let Some(current) = self.image.as_ref() else {
            return false;
        };
        let transformed = transform.apply_to(current);
        self.image = Some(transformed);
        self.orientation = self.orientation.then(transform);
        true
    }

    /// The buffer now matches the file on disk.
    pub fn mark_saved(&mut self) {
        self.orientation = Orientation::IDENTITY;
    }

    pub fn start_loading(&mut self) {
        self.is_loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the buffer differs from the file on disk.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.image.is_some() && !self.orientation.is_identity()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn fit_to_window(&self) -> bool {
        self.fit_to_window
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigation: NavigationInfo,
}

/// `"3 / 12"`, or `"– / 12"` while the current file is outside the listing.
#[must_use]
pub fn position_label(info: NavigationInfo) -> String {
    match info.current_index {
        Some(index) => format!("{} / {}", index + 1, info.total_count),
        None => format!("– / {}", info.total_count),
    }
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(image) = state.image() else {
        if state.is_loading() {
            return centered(Text::new(ctx.i18n.tr("viewer-loading")).size(typography::BODY_LG));
        }
        return empty_state::view(ctx.i18n);
    };

    let picture: Element<'a, Message> = if state.fit_to_window() {
        Image::new(image.handle.clone())
            .content_fit(ContentFit::ScaleDown)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        scrollable::Scrollable::new(
            Image::new(image.handle.clone())
                .content_fit(ContentFit::None)
                .width(Length::Fixed(image.width as f32))
                .height(Length::Fixed(image.height as f32)),
        )
        .direction(scrollable::Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    };

    let can_navigate = ctx.navigation.can_navigate() && !state.is_loading();
    let nav_button = |label: String, message: Message| {
        button(
            Text::new(label)
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe(can_navigate.then_some(message))
    };

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(nav_button(
            format!("← {}", ctx.i18n.tr("viewer-previous-button")),
            Message::NavigatePrevious,
        ))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(position_label(ctx.navigation)).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(nav_button(
            format!("{} →", ctx.i18n.tr("viewer-next-button")),
            Message::NavigateNext,
        ));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .push(
            Container::new(picture)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .push(controls)
        .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
