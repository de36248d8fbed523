// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Navigation**: Skip behavior when a file in the folder cannot be loaded
//! - **Save**: Encoder settings for the save command
//! - **Window**: Initial and minimum window dimensions
//! - **Diagnostics**: Activity log capacity

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Default number of consecutive unreadable files skipped while navigating.
pub const DEFAULT_MAX_SKIP_ATTEMPTS: u32 = 5;

/// Minimum allowed skip attempts.
pub const MIN_MAX_SKIP_ATTEMPTS: u32 = 1;

/// Maximum allowed skip attempts.
pub const MAX_MAX_SKIP_ATTEMPTS: u32 = 20;

// ==========================================================================
// Save Defaults
// ==========================================================================

/// Default JPEG quality used when saving (1-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Lowest JPEG quality accepted from the config file.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Highest JPEG quality accepted from the config file.
pub const MAX_JPEG_QUALITY: u8 = 100;

/// Largest edge the ICO container can hold.
pub const MAX_ICO_DIMENSION: u32 = 256;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of activity events retained in memory.
pub const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 200;
