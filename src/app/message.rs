// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::navigator::Direction;
use crate::media::{ImageData, Orientation};
use crate::ui::notifications;
use crate::ui::viewer::{self, Shortcut};
use crate::ui::{about, activity_log, details, help, navbar};
use std::path::PathBuf;
use std::time::Instant;

/// Why an image is being loaded, which decides what happens once it decoded
/// or failed.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOrigin {
    /// Open Image, a dropped file, or a file passed on the command line.
    Open,
    /// Previous/Next, or the first image of an opened folder.
    Navigation {
        direction: Direction,
        /// Names of the unreadable files skipped so far.
        skipped_files: Vec<String>,
    },
}

impl LoadOrigin {
    #[must_use]
    pub fn navigation(direction: Direction) -> Self {
        LoadOrigin::Navigation {
            direction,
            skipped_files: Vec::new(),
        }
    }
}

/// Top-level messages consumed by `App::update`. Component messages are
/// wrapped so there is a single update entry point.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    Navbar(navbar::Message),
    Help(help::Message),
    About(about::Message),
    Details(details::Message),
    ActivityLog(activity_log::Message),
    Notification(notifications::NotificationMessage),
    Shortcut(Shortcut),
    FileDropped(PathBuf),
    OpenImageDialogResult(Option<PathBuf>),
    OpenFolderDialogResult(Option<PathBuf>),
    SaveDialogResult(Option<PathBuf>),
    ImageLoaded {
        path: PathBuf,
        origin: LoadOrigin,
        result: Result<ImageData, Error>,
    },
    ImageSaved {
        /// Path chosen in the dialog.
        requested: PathBuf,
        /// Path actually written, which may carry an added extension.
        result: Result<PathBuf, Error>,
        /// Orientation of the buffer that was written.
        orientation: Orientation,
    },
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image file or folder to open on startup.
    pub file_path: Option<String>,
    /// Overrides the `GLIMPSE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Overrides the `GLIMPSE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
