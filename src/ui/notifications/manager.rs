// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle: queuing, auto-dismiss, and manual dismissal.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, or queues it when `MAX_VISIBLE` are on screen.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), "warning notification");
            }
            Severity::Error => {
                tracing::error!(key = notification.message_key(), "error notification");
            }
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

    /// Removes every expired visible notification.
    pub fn tick(&mut self) {
        self.expire_at(Instant::now());
    }

    fn expire_at(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired_at(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Drops notifications whose key starts with `prefix`.
    ///
    /// Used to retire stale "error-*" toasts once the user picked a valid file.
    pub fn clear_with_prefix(&mut self, prefix: &str) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.message_key().starts_with(prefix));
        self.queue.retain(|n| !n.message_key().starts_with(prefix));
        if self.visible.len() < before {
            self.promote_from_queue();
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

    /// Whether the tick subscription is needed.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::warning(format!("n-{i}")));
        }
        manager.push(Notification::warning("queued"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first);
        for i in 1..=MAX_VISIBLE {
            manager.push(Notification::error(format!("n-{i}")));
        }
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.dismiss(first_id));
    }

    #[test]
    fn expired_toasts_are_removed_but_errors_stay() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("transient"));
        manager.push(Notification::error("sticky"));

        manager.expire_at(Instant::now() + Duration::from_secs(60));

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["sticky"]);
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::warning("w");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_with_prefix_keeps_other_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("error-invalid-file-type"));
        manager.push(Notification::error("error-server"));
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("error-network-failure"));

        manager.clear_with_prefix("error-");

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["notification-config-load-error"]);
        assert_eq!(manager.queued_count(), 0);
    }
}
