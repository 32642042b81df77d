// SPDX-License-Identifier: MPL-2.0
//! Toasts shown in the bottom-right corner.
//!
//! Success toasts fade after a few seconds, errors stay until dismissed.
//! Messages are stored as i18n keys and resolved when rendered.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
