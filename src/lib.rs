// SPDX-License-Identifier: MPL-2.0
//! `glimpse` is a minimal image viewer built with the Iced GUI framework.
//!
//! Open an image or a folder, page through the folder with the arrow keys,
//! rotate or mirror the picture and save the result. Messages are localized
//! with Fluent and preferences live in a hand-edited `settings.toml`.

pub mod app;
pub mod diagnostics;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;

pub use app::config;
