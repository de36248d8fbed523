// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! # Screens
//!
//! - [`viewer`] - Image display with previous/next navigation
//! - [`details`] - File and pixel information about the current image
//! - [`activity_log`] - Recent user actions, warnings and errors
//! - [`help`] - Keyboard shortcuts and usage documentation
//! - [`about`] - Application description and credits
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - File / Edit / Info menu bar
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod activity_log;
pub mod design_tokens;
pub mod details;
pub mod help;
pub mod navbar;
pub mod notifications;
pub mod theming;
pub mod viewer;
