// SPDX-License-Identifier: MPL-2.0
//! Queue and lifetime of the toasts on screen.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check for expired toasts.
    Tick,
}

/// Visible toasts (newest first) plus the overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, or queues it when `MAX_VISIBLE` toasts are up.
    ///
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => log::warn!("Notification: {}", describe(&notification)),
            Severity::Error => log::error!("Notification: {}", describe(&notification)),
            Severity::Success => log::debug!("Notification: {}", describe(&notification)),
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drops every visible toast whose display time is over.
    pub fn tick(&mut self) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.should_auto_dismiss());
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether a timer subscription is needed.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes stale load errors once an image loads successfully.
    pub fn clear_load_errors(&mut self) {
        let before = self.visible.len();
        self.visible.retain(|n| !is_load_error(n));
        self.queue.retain(|n| !is_load_error(n));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}

fn is_load_error(notification: &Notification) -> bool {
    notification.message_key() == "notification-load-error"
}

fn describe(notification: &Notification) -> String {
    let mut text = notification.message_key().to_string();
    for (key, value) in notification.message_args() {
        text.push_str(&format!(" {key}={value}"));
    }
    text
}
