// SPDX-License-Identifier: MPL-2.0
//! Collector owning the activity log and the handles that feed it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction};

type SharedBuffer = Arc<Mutex<CircularBuffer<DiagnosticEvent>>>;

/// Handle for recording events into the collector's buffer.
///
/// Cheap to clone. Warnings and errors are also echoed to stderr.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    buffer: SharedBuffer,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.push(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("[WARN] {message}");
        self.push(DiagnosticEventKind::Warning { message });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("[ERROR] {message}");
        self.push(DiagnosticEventKind::Error { message });
    }

    fn push(&self, kind: DiagnosticEventKind) {
        lock(&self.buffer).push(DiagnosticEvent::new(kind));
    }
}

/// Owner of the activity log.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: SharedBuffer,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            buffer: Arc::clone(&self.buffer),
        }
    }

    /// Copy of the stored events, newest first.
    #[must_use]
    pub fn recent_events(&self) -> Vec<DiagnosticEvent> {
        lock(&self.buffer).iter().rev().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.buffer).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        lock(&self.buffer).clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(crate::app::config::DEFAULT_ACTIVITY_LOG_CAPACITY)
    }
}

fn lock(buffer: &SharedBuffer) -> MutexGuard<'_, CircularBuffer<DiagnosticEvent>> {
    // Poisoning only means a panic happened mid-push; the events stay valid.
    buffer.lock().unwrap_or_else(PoisonError::into_inner)
}
