// SPDX-License-Identifier: MPL-2.0
//! Event types recorded in the activity log.

use chrono::{DateTime, Local};

/// User-initiated actions worth recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    // ==========================================================================
    // Navigation
    // ==========================================================================
    NavigateNext,
    NavigatePrevious,
    OpenImage,
    OpenFolder,

    // ==========================================================================
    // Transforms
    // ==========================================================================
    RotateClockwise,
    RotateCounterClockwise,
    FlipHorizontal,
    FlipVertical,

    // ==========================================================================
    // Files
    // ==========================================================================
    SaveImage,

    // ==========================================================================
    // Screens
    // ==========================================================================
    OpenDetails,
    OpenActivityLog,
    OpenHelp,
    OpenAbout,
    ReturnToViewer,
}

impl UserAction {
    /// i18n key of the label shown on the activity log screen.
    pub fn label_key(self) -> &'static str {
        match self {
            UserAction::NavigateNext => "activity-action-navigate-next",
            UserAction::NavigatePrevious => "activity-action-navigate-previous",
            UserAction::OpenImage => "activity-action-open-image",
            UserAction::OpenFolder => "activity-action-open-folder",
            UserAction::RotateClockwise => "activity-action-rotate-cw",
            UserAction::RotateCounterClockwise => "activity-action-rotate-ccw",
            UserAction::FlipHorizontal => "activity-action-flip-horizontal",
            UserAction::FlipVertical => "activity-action-flip-vertical",
            UserAction::SaveImage => "activity-action-save-image",
            UserAction::OpenDetails => "activity-action-open-details",
            UserAction::OpenActivityLog => "activity-action-open-activity-log",
            UserAction::OpenHelp => "activity-action-open-help",
            UserAction::OpenAbout => "activity-action-open-about",
            UserAction::ReturnToViewer => "activity-action-return-to-viewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// Extra context such as the file name involved.
        details: Option<String>,
    },
    Warning {
        message: String,
    },
    Error {
        message: String,
    },
}

/// A recorded event stamped with local wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Local>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Local>) -> Self {
        Self { timestamp, kind }
    }

    /// `HH:MM:SS` for the activity log list.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
