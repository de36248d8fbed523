// SPDX-License-Identifier: MPL-2.0
//! Bound on how many unreadable files navigation steps over in one go.

use crate::app::config::{DEFAULT_MAX_SKIP_ATTEMPTS, MAX_MAX_SKIP_ATTEMPTS, MIN_MAX_SKIP_ATTEMPTS};

/// Number of consecutive unreadable files skipped before giving up, always
/// within `MIN_MAX_SKIP_ATTEMPTS..=MAX_MAX_SKIP_ATTEMPTS`.
///
/// ```
/// use glimpse::media::MaxSkipAttempts;
///
/// assert_eq!(MaxSkipAttempts::new(100).value(), 20);
/// assert_eq!(MaxSkipAttempts::from_config(None).value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSkipAttempts(u32);

impl MaxSkipAttempts {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_MAX_SKIP_ATTEMPTS, MAX_MAX_SKIP_ATTEMPTS))
    }

    /// Reads the optional `[navigation] max_skip_attempts` value.
    pub fn from_config(value: Option<u32>) -> Self {
        value.map_or_else(Self::default, Self::new)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether `skipped` files already exhausted the budget.
    pub fn exhausted_by(self, skipped: usize) -> bool {
        skipped >= self.0 as usize
    }
}

impl Default for MaxSkipAttempts {
    fn default() -> Self {
        Self(DEFAULT_MAX_SKIP_ATTEMPTS)
    }
}
