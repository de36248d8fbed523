// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts of the viewer.

use crate::media::Transform;
use iced::keyboard::{self, key::Named, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    NavigateNext,
    NavigatePrevious,
    Transform(Transform),
    OpenImage,
    OpenFolder,
    SaveImage,
    OpenDetails,
    OpenHelp,
    /// Closes menus and returns to the viewer.
    Back,
}

/// Maps a key press to a shortcut. Alt combinations are left to the system.
#[must_use]
pub fn from_key_press(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    if modifiers.alt() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowRight) if modifiers.is_empty() => Some(Shortcut::NavigateNext),
        Key::Named(Named::ArrowLeft) if modifiers.is_empty() => Some(Shortcut::NavigatePrevious),
        Key::Named(Named::F1) => Some(Shortcut::OpenHelp),
        Key::Named(Named::Escape) => Some(Shortcut::Back),
        Key::Character(c) => {
            let c = c.as_str().to_ascii_lowercase();
            match (c.as_str(), modifiers.command(), modifiers.shift()) {
                ("o", true, false) => Some(Shortcut::OpenImage),
                ("o", true, true) => Some(Shortcut::OpenFolder),
                ("s", true, false) => Some(Shortcut::SaveImage),
                ("r", false, false) => Some(Shortcut::Transform(Transform::RotateClockwise)),
                ("r", false, true) => Some(Shortcut::Transform(Transform::RotateCounterClockwise)),
                ("h", false, false) => Some(Shortcut::Transform(Transform::FlipHorizontal)),
                ("v", false, false) => Some(Shortcut::Transform(Transform::FlipVertical)),
                ("i", false, false) => Some(Shortcut::OpenDetails),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Extracts a shortcut from a raw keyboard event.
#[must_use]
pub fn from_event(event: &keyboard::Event) -> Option<Shortcut> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => from_key_press(key, *modifiers),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn arrows_navigate_without_modifiers() {
        assert_eq!(
            from_key_press(&Key::Named(Named::ArrowRight), Modifiers::empty()),
            Some(Shortcut::NavigateNext)
        );
        assert_eq!(
            from_key_press(&Key::Named(Named::ArrowLeft), Modifiers::empty()),
            Some(Shortcut::NavigatePrevious)
        );
        assert_eq!(
            from_key_press(&Key::Named(Named::ArrowLeft), Modifiers::SHIFT),
            None
        );
    }

    #[test]
    fn shift_reverses_rotation() {
        assert_eq!(
            from_key_press(&character("r"), Modifiers::empty()),
            Some(Shortcut::Transform(Transform::RotateClockwise))
        );
        assert_eq!(
            from_key_press(&character("R"), Modifiers::SHIFT),
            Some(Shortcut::Transform(Transform::RotateCounterClockwise))
        );
    }

    #[test]
    fn flips_and_details_use_plain_letters() {
        assert_eq!(
            from_key_press(&character("h"), Modifiers::empty()),
            Some(Shortcut::Transform(Transform::FlipHorizontal))
        );
        assert_eq!(
            from_key_press(&character("v"), Modifiers::empty()),
            Some(Shortcut::Transform(Transform::FlipVertical))
        );
        assert_eq!(
            from_key_press(&character("i"), Modifiers::empty()),
            Some(Shortcut::OpenDetails)
        );
        assert_eq!(from_key_press(&character("h"), Modifiers::COMMAND), None);
    }

    #[test]
    fn command_shortcuts_open_and_save() {
        assert_eq!(
            from_key_press(&character("o"), Modifiers::COMMAND),
            Some(Shortcut::OpenImage)
        );
        assert_eq!(
            from_key_press(&character("O"), Modifiers::COMMAND | Modifiers::SHIFT),
            Some(Shortcut::OpenFolder)
        );
        assert_eq!(
            from_key_press(&character("s"), Modifiers::COMMAND),
            Some(Shortcut::SaveImage)
        );
        assert_eq!(from_key_press(&character("s"), Modifiers::empty()), None);
    }

    #[test]
    fn function_keys_and_escape() {
        assert_eq!(
            from_key_press(&Key::Named(Named::F1), Modifiers::empty()),
            Some(Shortcut::OpenHelp)
        );
        assert_eq!(
            from_key_press(&Key::Named(Named::Escape), Modifiers::empty()),
            Some(Shortcut::Back)
        );
    }

    #[test]
    fn alt_combinations_are_ignored() {
        assert_eq!(from_key_press(&character("r"), Modifiers::ALT), None);
        assert_eq!(
            from_key_press(&Key::Named(Named::F1), Modifiers::ALT),
            None
        );
    }
}
