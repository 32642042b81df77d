// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the application.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{time, Subscription};
use std::time::Duration;

/// How often toast lifetimes are checked.
pub const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

/// Ticks the notification manager while toasts are on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}
