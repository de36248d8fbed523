// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers borrow the parts of [`super::App`] they need through
//! [`UpdateContext`] and return the follow-up [`Task`].

use super::message::LoadOrigin;
use super::persisted_state::AppState;
use super::{Message, Screen};
use crate::config::Config;
use crate::diagnostics::{DiagnosticEvent, DiagnosticsCollector, UserAction};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::extensions::{IMAGE_EXTENSIONS, IMAGE_SAVE_FILTERS};
use crate::media::navigator::Direction;
use crate::media::{
    self, ImageData, ImageDetails, ImageNavigator, MaxSkipAttempts, Orientation, Transform,
};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::activity_log::{self, Event as ActivityLogEvent};
use crate::ui::details::{self, Event as DetailsEvent};
use crate::ui::help::{self, Event as HelpEvent};
use crate::ui::navbar::{self, Event as NavbarEvent, Menu};
use crate::ui::notifications::{self, Notification};
use crate::ui::viewer::{self, Effect as ViewerEffect, Shortcut};
use iced::Task;
use std::path::{Path, PathBuf};

pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub config: &'a Config,
    pub viewer: &'a mut viewer::State,
    pub navigator: &'a mut ImageNavigator,
    pub open_menu: &'a mut Option<Menu>,
    pub help_state: &'a mut help::State,
    pub details: &'a mut Option<ImageDetails>,
    pub activity_events: &'a mut Vec<DiagnosticEvent>,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsCollector,
    pub max_skip_attempts: MaxSkipAttempts,
}

impl UpdateContext<'_> {
    fn log_action(&self, action: UserAction, details: Option<String>) {
        self.diagnostics
            .handle()
            .log_action_with_details(action, details);
    }

    fn persist_state(&mut self) {
        if let Some(key) = self.app_state.save() {
            self.notifications.push(Notification::warning(key));
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn transform_action(transform: Transform) -> UserAction {
    match transform {
        Transform::RotateClockwise => UserAction::RotateClockwise,
        Transform::RotateCounterClockwise => UserAction::RotateCounterClockwise,
        Transform::FlipHorizontal => UserAction::FlipHorizontal,
        Transform::FlipVertical => UserAction::FlipVertical,
    }
}

// ==========================================================================
// Component messages
// ==========================================================================

pub fn handle_viewer_message(ctx: &mut UpdateContext<'_>, message: &viewer::Message) -> Task<Message> {
    match viewer::component::update(message) {
        ViewerEffect::None => Task::none(),
        ViewerEffect::Navigate(direction) => handle_navigate(ctx, direction),
        ViewerEffect::OpenImage => handle_open_image_dialog(ctx),
        ViewerEffect::OpenFolder => handle_open_folder_dialog(ctx),
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.open_menu) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::OpenImage => handle_open_image_dialog(ctx),
        NavbarEvent::OpenFolder => handle_open_folder_dialog(ctx),
        NavbarEvent::SaveImage => handle_save_dialog(ctx),
        NavbarEvent::Quit => iced::exit(),
        NavbarEvent::Transform(transform) => {
            apply_transform(ctx, transform);
            Task::none()
        }
        NavbarEvent::OpenDetails => handle_screen_switch(ctx, Screen::Details),
        NavbarEvent::OpenActivityLog => handle_screen_switch(ctx, Screen::ActivityLog),
        NavbarEvent::OpenAbout => handle_screen_switch(ctx, Screen::About),
        NavbarEvent::OpenHelp => handle_screen_switch(ctx, Screen::Help),
    }
}

pub fn handle_help_message(ctx: &mut UpdateContext<'_>, message: help::Message) -> Task<Message> {
    match help::update(ctx.help_state, message) {
        HelpEvent::None => Task::none(),
        HelpEvent::BackToViewer => handle_screen_switch(ctx, Screen::Viewer),
    }
}

pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::None => Task::none(),
        AboutEvent::BackToViewer => handle_screen_switch(ctx, Screen::Viewer),
    }
}

pub fn handle_details_message(
    ctx: &mut UpdateContext<'_>,
    message: &details::Message,
) -> Task<Message> {
    match details::update(message) {
        DetailsEvent::None => Task::none(),
        DetailsEvent::BackToViewer => handle_screen_switch(ctx, Screen::Viewer),
    }
}

pub fn handle_activity_log_message(
    ctx: &mut UpdateContext<'_>,
    message: &activity_log::Message,
) -> Task<Message> {
    match activity_log::update(message) {
        ActivityLogEvent::None => Task::none(),
        ActivityLogEvent::BackToViewer => handle_screen_switch(ctx, Screen::Viewer),
        ActivityLogEvent::Clear => {
            ctx.diagnostics.clear();
            ctx.activity_events.clear();
            Task::none()
        }
    }
}

/// Switches screens, snapshotting the data the target screen renders.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.open_menu = None;
    if *ctx.screen == target {
        return Task::none();
    }
    ctx.log_action(target.user_action(), None);

    match target {
        Screen::Details => {
            *ctx.details = match (ctx.viewer.path(), ctx.viewer.image()) {
                (Some(path), Some(image)) => Some(ImageDetails::collect(path, image)),
                _ => None,
            };
        }
        Screen::ActivityLog => {
            *ctx.activity_events = ctx.diagnostics.recent_events();
        }
        Screen::Viewer | Screen::Help | Screen::About => {}
    }

    *ctx.screen = target;
    Task::none()
}

// ==========================================================================
// Keyboard
// ==========================================================================

/// Routes a keyboard shortcut. Only Back and Help apply outside the viewer.
pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::Back => {
            if ctx.open_menu.take().is_some() {
                Task::none()
            } else {
                handle_screen_switch(ctx, Screen::Viewer)
            }
        }
        Shortcut::OpenHelp => handle_screen_switch(ctx, Screen::Help),
        _ if *ctx.screen != Screen::Viewer => Task::none(),
        Shortcut::NavigateNext => handle_navigate(ctx, Direction::Next),
        Shortcut::NavigatePrevious => handle_navigate(ctx, Direction::Previous),
        Shortcut::Transform(transform) => {
            *ctx.open_menu = None;
            apply_transform(ctx, transform);
            Task::none()
        }
        Shortcut::OpenImage => handle_open_image_dialog(ctx),
        Shortcut::OpenFolder => handle_open_folder_dialog(ctx),
        Shortcut::SaveImage => handle_save_dialog(ctx),
        Shortcut::OpenDetails => handle_screen_switch(ctx, Screen::Details),
    }
}

// ==========================================================================
// Transforms
// ==========================================================================

fn apply_transform(ctx: &mut UpdateContext<'_>, transform: Transform) {
    if ctx.viewer.is_loading() {
        return;
    }
    if ctx.viewer.apply_transform(transform) {
        ctx.log_action(transform_action(transform), ctx.viewer.file_name());
    }
}

// ==========================================================================
// Loading and navigation
// ==========================================================================

/// Runs blocking codec work on tokio's blocking pool.
async fn run_blocking<T, F>(work: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

fn load_task(path: PathBuf, origin: LoadOrigin) -> Task<Message> {
    let target = path.clone();
    Task::perform(run_blocking(move || media::load_image(&target)), move |result| {
        Message::ImageLoaded {
            path,
            origin,
            result,
        }
    })
}

/// Starts loading the folder neighbour in `direction`.
///
/// Ignored while another load is in flight. The listing is rescanned first
/// so files added or removed since the last scan are honoured.
pub fn handle_navigate(ctx: &mut UpdateContext<'_>, direction: Direction) -> Task<Message> {
    *ctx.open_menu = None;
    if ctx.viewer.is_loading() || ctx.navigator.directory().is_none() {
        return Task::none();
    }

    let action = match direction {
        Direction::Next => UserAction::NavigateNext,
        Direction::Previous => UserAction::NavigatePrevious,
    };
    ctx.log_action(action, None);

    if let Err(err) = ctx.navigator.rescan(ctx.config.sort_order()) {
        ctx.diagnostics
            .handle()
            .log_warning(format!("Folder rescan failed: {err}"));
    }

    load_navigation_target(ctx, direction, Vec::new())
}

fn load_navigation_target(
    ctx: &mut UpdateContext<'_>,
    direction: Direction,
    skipped_files: Vec<String>,
) -> Task<Message> {
    let Some(target) = ctx.navigator.peek_nth(direction, skipped_files.len()) else {
        ctx.viewer.finish_loading();
        return Task::none();
    };

    ctx.viewer.start_loading();
    load_task(
        target,
        LoadOrigin::Navigation {
            direction,
            skipped_files,
        },
    )
}

/// Applies the outcome of a load started by open or navigation.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    origin: LoadOrigin,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match (result, origin) {
        (Ok(image), LoadOrigin::Open) => {
            if let Err(err) = ctx
                .navigator
                .scan_directory(&path, ctx.config.sort_order())
            {
                // The old listing belongs to another folder.
                *ctx.navigator = ImageNavigator::new();
                ctx.notifications.push(
                    Notification::warning("notification-scan-dir-error")
                        .with_arg("error", ctx.i18n.tr(err.i18n_key())),
                );
            }
            show_image(ctx, path, image);
            Task::none()
        }
        (Ok(image), LoadOrigin::Navigation { skipped_files, .. }) => {
            ctx.navigator.confirm_navigation(&path);
            show_image(ctx, path, image);
            if !skipped_files.is_empty() {
                push_skipped_files_warning(ctx, &skipped_files);
            }
            Task::none()
        }
        (Err(err), LoadOrigin::Open) => {
            ctx.viewer.finish_loading();
            ctx.notifications.push(
                Notification::error("notification-load-error")
                    .with_arg("name", file_name_of(&path))
                    .with_arg("error", ctx.i18n.tr(err.i18n_key())),
            );
            Task::none()
        }
        (
            Err(err),
            LoadOrigin::Navigation {
                direction,
                mut skipped_files,
            },
        ) => {
            eprintln!("Skipping {}: {err}", path.display());
            skipped_files.push(file_name_of(&path));
            handle_retry_navigation(ctx, direction, skipped_files)
        }
    }
}

/// Continues past an unreadable file in the same direction, or gives up and
/// reports every skipped name in one warning.
fn handle_retry_navigation(
    ctx: &mut UpdateContext<'_>,
    direction: Direction,
    skipped_files: Vec<String>,
) -> Task<Message> {
    let next = ctx.navigator.peek_nth(direction, skipped_files.len());
    let wrapped_around = skipped_files.len() >= ctx.navigator.len()
        || next.as_deref() == ctx.navigator.current_image_path();

    if ctx.max_skip_attempts.exhausted_by(skipped_files.len()) || wrapped_around || next.is_none()
    {
        ctx.viewer.finish_loading();
        push_skipped_files_warning(ctx, &skipped_files);
        restore_listing(ctx);
        return Task::none();
    }

    load_navigation_target(ctx, direction, skipped_files)
}

/// Re-lists the folder of the displayed image after an Open Folder attempt
/// that showed nothing, so the listing matches the image on screen again.
fn restore_listing(ctx: &mut UpdateContext<'_>) {
    if ctx.navigator.current_image_path().is_some() {
        return;
    }
    if let Some(path) = ctx.viewer.path().map(Path::to_path_buf) {
        if let Err(err) = ctx
            .navigator
            .scan_directory(&path, ctx.config.sort_order())
        {
            eprintln!("Failed to restore listing for {}: {err}", path.display());
            *ctx.navigator = ImageNavigator::new();
        }
    }
}

fn push_skipped_files_warning(ctx: &mut UpdateContext<'_>, skipped_files: &[String]) {
    let files = format_skipped_files_message(ctx.i18n, skipped_files);
    ctx.notifications
        .push(Notification::warning("notification-skipped-files").with_arg("files", files));
}

fn show_image(ctx: &mut UpdateContext<'_>, path: PathBuf, image: ImageData) {
    if *ctx.screen == Screen::Details {
        *ctx.details = Some(ImageDetails::collect(&path, &image));
    }

    let previous_directory = ctx.app_state.last_open_directory.clone();
    ctx.app_state.set_last_open_directory(&path);
    ctx.viewer.set_image(path, image);
    ctx.notifications.clear_load_errors();

    if ctx.app_state.last_open_directory != previous_directory {
        ctx.persist_state();
    }
}

/// Maximum length for a filename in notifications (characters).
const MAX_FILENAME_LEN: usize = 12;

fn truncate_filename(name: &str) -> String {
    if name.chars().count() <= MAX_FILENAME_LEN {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(MAX_FILENAME_LEN - 1).collect();
        format!("{truncated}…")
    }
}

/// Formats the skipped files list: one or two names in full, otherwise the
/// first name followed by a count of the others.
pub fn format_skipped_files_message(i18n: &I18n, skipped_files: &[String]) -> String {
    match skipped_files {
        [] => String::new(),
        [only] => truncate_filename(only),
        [first, second] => format!(
            "{}, {}",
            truncate_filename(first),
            truncate_filename(second)
        ),
        [first, rest @ ..] => {
            let others = rest.len().to_string();
            let others_text = i18n.tr_with_args(
                "notification-skipped-and-others",
                &[("count", others.as_str())],
            );
            format!("{} {}", truncate_filename(first), others_text)
        }
    }
}

// ==========================================================================
// Opening
// ==========================================================================

fn dialog_start_directory(ctx: &UpdateContext<'_>) -> Option<PathBuf> {
    ctx.navigator
        .directory()
        .map(Path::to_path_buf)
        .or_else(|| ctx.app_state.last_open_directory.clone())
        .filter(|dir| dir.is_dir())
}

pub fn handle_open_image_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.open_menu = None;
    let start_directory = dialog_start_directory(ctx);
    let filter_name = ctx.i18n.tr("dialog-filter-images");

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter(filter_name, IMAGE_EXTENSIONS);
            if let Some(dir) = start_directory {
                dialog = dialog.set_directory(&dir);
            }
            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenImageDialogResult,
    )
}

pub fn handle_open_folder_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.open_menu = None;
    let start_directory = dialog_start_directory(ctx);

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();
            if let Some(dir) = start_directory {
                dialog = dialog.set_directory(&dir);
            }
            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFolderDialogResult,
    )
}

/// Opens a file like Open Image, or a directory like Open Folder.
///
/// Relative paths (from the command line) are resolved against the working
/// directory first.
pub fn handle_open_path(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    let path = std::path::absolute(&path).unwrap_or(path);
    if path.is_dir() {
        return handle_open_folder(ctx, path);
    }
    if ctx.viewer.is_loading() {
        return Task::none();
    }
    if !path.exists() {
        ctx.notifications.push(
            Notification::warning("notification-path-not-found")
                .with_arg("path", path.display().to_string()),
        );
        return Task::none();
    }
    if !media::is_supported_image(&path) {
        ctx.notifications.push(
            Notification::warning("notification-unsupported-file")
                .with_arg("name", file_name_of(&path)),
        );
        return Task::none();
    }

    ctx.log_action(UserAction::OpenImage, Some(file_name_of(&path)));
    ctx.viewer.start_loading();
    load_task(path, LoadOrigin::Open)
}

/// Lists `directory` and loads its first image. The displayed image and the
/// listing stay as they were when the folder holds nothing viewable.
pub fn handle_open_folder(ctx: &mut UpdateContext<'_>, directory: PathBuf) -> Task<Message> {
    if ctx.viewer.is_loading() {
        return Task::none();
    }
    ctx.log_action(
        UserAction::OpenFolder,
        Some(directory.display().to_string()),
    );

    match ctx
        .navigator
        .scan_from_directory(&directory, ctx.config.sort_order())
    {
        Ok(Some(first)) => {
            ctx.viewer.start_loading();
            load_task(first, LoadOrigin::navigation(Direction::Next))
        }
        Ok(None) => {
            ctx.notifications.push(
                Notification::warning("notification-empty-folder")
                    .with_arg("path", directory.display().to_string()),
            );
            Task::none()
        }
        Err(err) => {
            ctx.notifications.push(
                Notification::warning("notification-scan-dir-error")
                    .with_arg("error", ctx.i18n.tr(err.i18n_key())),
            );
            Task::none()
        }
    }
}

/// Handles a file or folder dropped on the window.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    let task = handle_screen_switch(ctx, Screen::Viewer);
    task.chain(handle_open_path(ctx, path))
}

// ==========================================================================
// Saving
// ==========================================================================

pub fn handle_save_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.open_menu = None;
    if !ctx.viewer.has_image() || ctx.viewer.is_loading() {
        return Task::none();
    }

    let start_directory = ctx
        .viewer
        .path()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .or_else(|| ctx.app_state.last_save_directory.clone())
        .filter(|dir| dir.is_dir());
    let file_name = ctx.viewer.file_name();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();
            for &(name, extensions) in IMAGE_SAVE_FILTERS {
                dialog = dialog.add_filter(name, extensions);
            }
            if let Some(dir) = start_directory {
                dialog = dialog.set_directory(&dir);
            }
            if let Some(name) = file_name {
                dialog = dialog.set_file_name(name);
            }
            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let (Some(path), Some(image)) = (path, ctx.viewer.image().cloned()) else {
        return Task::none();
    };

    ctx.log_action(UserAction::SaveImage, Some(file_name_of(&path)));
    let orientation = ctx.viewer.orientation();
    let jpeg_quality = ctx.config.jpeg_quality();
    let requested = path.clone();

    Task::perform(
        run_blocking(move || media::save_image(image.buffer(), &path, jpeg_quality)),
        move |result| Message::ImageSaved {
            requested,
            result,
            orientation,
        },
    )
}

pub fn handle_image_saved(
    ctx: &mut UpdateContext<'_>,
    requested: &Path,
    result: Result<PathBuf, Error>,
    orientation: Orientation,
) -> Task<Message> {
    match result {
        Ok(saved) => {
            ctx.notifications.push(
                Notification::success("notification-save-success")
                    .with_arg("name", file_name_of(&saved)),
            );

            ctx.app_state.set_last_save_directory_from_file(&saved);
            ctx.persist_state();

            if ctx.navigator.is_in_current_directory(&saved) {
                if let Err(err) = ctx.navigator.rescan(ctx.config.sort_order()) {
                    eprintln!("Failed to rescan after save: {err}");
                }
            }

            if ctx.viewer.path() == Some(saved.as_path()) && ctx.viewer.orientation() == orientation
            {
                ctx.viewer.mark_saved();
            }
        }
        Err(err) => {
            ctx.notifications.push(
                Notification::error("notification-save-error")
                    .with_arg("name", file_name_of(requested))
                    .with_arg("error", ctx.i18n.tr(err.i18n_key())),
            );
        }
    }
    Task::none()
}
