// SPDX-License-Identifier: MPL-2.0
//! Queueing, timing and dismissal of toasts.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings and errors pushed afterwards are also recorded here.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn push(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.log_warning(notification.summary()),
                Severity::Error => handle.log_error(notification.summary()),
                Severity::Success | Severity::Info => {}
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts. Driven by a periodic subscription.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes stale load failures once an image opened successfully.
    pub fn clear_load_errors(&mut self) {
        let visible_before = self.visible.len();
        let is_load_error = |n: &Notification| n.message_key().starts_with("notification-load-error");
        self.visible.retain(|n| !is_load_error(n));
        self.queue.retain(|n| !is_load_error(n));
        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("first");
        let first_id = first.id();
        manager.push(first);
        for i in 1..=MAX_VISIBLE {
            manager.push(Notification::success(format!("more-{i}")));
        }

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.dismiss(first_id));
    }

    #[test]
    fn errors_survive_ticks_until_dismissed() {
        let mut manager = Manager::new();
        let notification = Notification::error("notification-save-error");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Tick);
        assert_eq!(manager.visible_count(), 1);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_load_errors_keeps_other_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-load-error"));
        manager.push(Notification::success("notification-save-success"));
        manager.push(Notification::error("notification-save-error"));
        manager.push(Notification::error("notification-load-error"));

        manager.clear_load_errors();

        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager
            .visible()
            .all(|n| n.message_key() != "notification-load-error"));
    }

    #[test]
    fn warnings_and_errors_reach_the_activity_log() {
        let collector = DiagnosticsCollector::new(10);
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.push(Notification::success("notification-save-success"));
        manager.push(Notification::warning("notification-empty-folder"));
        manager.push(Notification::error("notification-save-error").with_arg("error", "disk"));

        let events = collector.recent_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0].kind,
            DiagnosticEventKind::Error { message } if message == "notification-save-error (error=disk)"
        ));
        assert!(matches!(
            &events[1].kind,
            DiagnosticEventKind::Warning { message } if message == "notification-empty-folder"
        ));
    }
}
