// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer and the
//! secondary screens.
//!
//! The `App` struct wires together the viewer, the folder navigator,
//! localization and persisted state, and translates messages into side
//! effects like image loading, saving or state persistence.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, LoadOrigin, Message};
pub use screen::Screen;
pub use update::format_skipped_files_message;

use crate::diagnostics::{DiagnosticEvent, DiagnosticsCollector};
use crate::i18n::fluent::I18n;
use crate::media::{ImageDetails, ImageNavigator, MaxSkipAttempts};
use crate::ui::help;
use crate::ui::navbar::Menu;
use crate::ui::notifications::{self, Notification};
use crate::ui::viewer;
use config::{
    Config, DEFAULT_ACTIVITY_LOG_CAPACITY, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    theme: Theme,
    viewer: viewer::State,
    navigator: ImageNavigator,
    open_menu: Option<Menu>,
    help_state: help::State,
    /// Snapshot shown on the details screen.
    details: Option<ImageDetails>,
    /// Snapshot shown on the activity log screen, newest first.
    activity_events: Vec<DiagnosticEvent>,
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    max_skip_attempts: MaxSkipAttempts,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("viewer", &self.viewer.path())
            .field("navigator_len", &self.navigator.len())
            .finish_non_exhaustive()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(I18n::default(), Config::default())
    }
}

/// `"*photo.jpg - Glimpse"` while modified, `"Glimpse"` when nothing is open.
#[must_use]
pub fn window_title(app_name: &str, file_name: Option<&str>, modified: bool) -> String {
    match file_name {
        Some(name) if modified => format!("*{name} - {app_name}"),
        Some(name) => format!("{name} - {app_name}"),
        None => app_name.to_string(),
    }
}

impl App {
    fn with_config(i18n: I18n, config: Config) -> Self {
        let diagnostics = DiagnosticsCollector::new(DEFAULT_ACTIVITY_LOG_CAPACITY);
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n,
            screen: Screen::Viewer,
            theme: config.general.theme_mode.to_iced_theme(),
            viewer: viewer::State::new(config.display.fit_to_window.unwrap_or(true)),
            navigator: ImageNavigator::new(),
            open_menu: None,
            help_state: help::State::new(),
            details: None,
            activity_events: Vec::new(),
            app_state: persisted_state::AppState::default(),
            notifications,
            diagnostics,
            max_skip_attempts: MaxSkipAttempts::from_config(config.navigation.max_skip_attempts),
            config,
        }
    }

    /// Loads config and session state, then opens the startup path if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::with_config(i18n, config);

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let task = match flags.file_path {
            Some(path) => update::handle_open_path(&mut app.update_context(), PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            config: &self.config,
            viewer: &mut self.viewer,
            navigator: &mut self.navigator,
            open_menu: &mut self.open_menu,
            help_state: &mut self.help_state,
            details: &mut self.details,
            activity_events: &mut self.activity_events,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
            diagnostics: &self.diagnostics,
            max_skip_attempts: self.max_skip_attempts,
        }
    }

    fn title(&self) -> String {
        window_title(
            &self.i18n.tr("window-title"),
            self.viewer.file_name().as_deref(),
            self.viewer.is_modified(),
        )
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Notification(notification_message) = &message {
            self.notifications.handle_message(notification_message);
            return Task::none();
        }
        if let Message::Tick(_) = message {
            self.notifications.tick();
            return Task::none();
        }

        let mut ctx = self.update_context();
        match message {
            Message::Viewer(viewer_message) => update::handle_viewer_message(&mut ctx, &viewer_message),
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Help(help_message) => update::handle_help_message(&mut ctx, help_message),
            Message::About(about_message) => update::handle_about_message(&mut ctx, &about_message),
            Message::Details(details_message) => {
                update::handle_details_message(&mut ctx, &details_message)
            }
            Message::ActivityLog(log_message) => {
                update::handle_activity_log_message(&mut ctx, &log_message)
            }
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::OpenImageDialogResult(path) => match path {
                Some(path) => update::handle_open_path(&mut ctx, path),
                None => Task::none(),
            },
            Message::OpenFolderDialogResult(path) => match path {
                Some(path) => update::handle_open_folder(&mut ctx, path),
                None => Task::none(),
            },
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(&mut ctx, path),
            Message::ImageLoaded {
                path,
                origin,
                result,
            } => update::handle_image_loaded(&mut ctx, path, origin, result),
            Message::ImageSaved {
                requested,
                result,
                orientation,
            } => update::handle_image_saved(&mut ctx, &requested, result, orientation),
            Message::Notification(_) | Message::Tick(_) => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            viewer: &self.viewer,
            navigation: self.navigator.navigation_info(),
            open_menu: self.open_menu,
            help_state: &self.help_state,
            details: self.details.as_ref(),
            activity_events: &self.activity_events,
            notifications: &self.notifications,
        })
    }
}
