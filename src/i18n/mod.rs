// SPDX-License-Identifier: MPL-2.0
//! Localization through Fluent bundles embedded in the binary.
//!
//! The locale is resolved from `--lang`, then `[general] language` in the
//! config file, then the operating system, falling back to `en-US`.

pub mod fluent;
