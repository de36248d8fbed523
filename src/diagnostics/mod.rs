// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log of user actions, warnings and errors.
//!
//! Events are kept in a memory-bounded circular buffer shared between the
//! application shell and the notification manager through a cheap-to-clone
//! [`DiagnosticsHandle`]. The log is shown on the activity log screen and is
//! never written to disk.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
