// SPDX-License-Identifier: MPL-2.0
//! Native event routing.
//!
//! Keyboard shortcuts are forwarded on every screen; `App::update` decides
//! which ones apply to the active screen. Files dropped on the window are
//! opened.

use super::Message;
use crate::ui::viewer::shortcuts;
use iced::{event, time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Keyboard(keyboard_event) => match status {
            event::Status::Ignored => shortcuts::from_event(&keyboard_event).map(Message::Shortcut),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Ticks only while toasts are waiting to expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
