// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for operation outcomes.
//!
//! - Duration: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - At most three toasts are visible; the rest wait in a queue
//! - Toasts stack in the bottom-right corner
//!
//! ```ignore
//! manager.push(Notification::success("notification-save-success").with_arg("name", "cat.png"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
