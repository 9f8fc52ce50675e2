// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the toast container: it is created lazily on the first
//! notification, keeps toasts in the order they were pushed, and removes each
//! one once its own schedule runs out.

use super::notification::{Notification, NotificationId, Phase, Severity, ToastTiming};
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for advancing toast schedules.
    Tick(Instant),
}

/// Manages the stacked toasts.
#[derive(Debug, Default)]
pub struct Manager {
    /// Toasts in call order (oldest first). `None` until the first push.
    container: Option<VecDeque<Notification>>,
    timing: ToastTiming,
}

impl Manager {
    /// Creates a new manager with the default 3000 ms / 300 ms timing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timing(timing: ToastTiming) -> Self {
        Self {
            container: None,
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// Whether the toast container has been created.
    #[must_use]
    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    fn container(&mut self) -> &mut VecDeque<Notification> {
        self.container.get_or_insert_with(VecDeque::new)
    }

    /// Appends a toast created at `now` and returns its ID.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> NotificationId {
        let notification = Notification::new(severity, message, now, self.timing);
        let id = notification.id();
        self.push(notification);
        id
    }

    /// Appends an already built notification at the bottom of the stack.
    pub fn push(&mut self, notification: Notification) {
        tracing::trace!(
            id = ?notification.id(),
            severity = %notification.severity(),
            "toast pushed"
        );
        self.container().push_back(notification);
    }

    /// Starts the exit transition of a toast immediately.
    ///
    /// Returns `true` if the toast was found and was not already leaving.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(container) = self.container.as_mut() else {
            return false;
        };
        container
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.dismiss(now))
    }

    /// Removes every toast whose exit transition has finished.
    ///
    /// Returns the number of toasts removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let Some(container) = self.container.as_mut() else {
            return 0;
        };
        let before = container.len();
        container.retain(|n| !n.schedule().is_due(now));
        before - container.len()
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
            Message::Tick(instant) => {
                self.tick(*instant);
            }
        }
    }

    /// Returns the toasts currently in the container, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.container.iter().flatten()
    }

    /// Returns the toasts that are still on screen at `now` with their phase.
    pub fn visible_at(&self, now: Instant) -> impl Iterator<Item = (&Notification, Phase)> {
        self.visible()
            .map(move |n| (n, n.phase(now)))
            .filter(|(_, phase)| *phase != Phase::Expired)
    }

    /// Returns the number of toasts in the container.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.container.as_ref().map_or(0, VecDeque::len)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.visible_count() > 0
    }

    /// Removes all toasts. The container itself stays.
    pub fn clear(&mut self) {
        if let Some(container) = self.container.as_mut() {
            container.clear();
        }
    }
}
