// SPDX-License-Identifier: MPL-2.0
//! Screens the user can navigate between.

use crate::diagnostics::UserAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Viewer,
    Details,
    ActivityLog,
    Help,
    About,
}

impl Screen {
    /// Action recorded in the activity log when switching to this screen.
    #[must_use]
    pub fn user_action(self) -> UserAction {
        match self {
            Screen::Viewer => UserAction::ReturnToViewer,
            Screen::Details => UserAction::OpenDetails,
            Screen::ActivityLog => UserAction::OpenActivityLog,
            Screen::Help => UserAction::OpenHelp,
            Screen::About => UserAction::OpenAbout,
        }
    }
}
