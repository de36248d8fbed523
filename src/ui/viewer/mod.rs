// SPDX-License-Identifier: MPL-2.0
//! Image viewer: the displayed buffer, Previous/Next controls and shortcuts.

pub mod component;
mod empty_state;
pub mod shortcuts;

pub use component::{Effect, Message, State, ViewContext};
pub use shortcuts::Shortcut;
