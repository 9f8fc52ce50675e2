// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum and the
//! `DismissSchedule` that drives each toast's timed lifecycle.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the toast color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Parses a kind name. Unknown or empty names fall back to `Info`.
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Returns the background color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS,
            Severity::Error => palette::ERROR,
            Severity::Warning => palette::WARNING,
            Severity::Info => palette::INFO,
        }
    }

    /// Returns the CSS-style hex code of [`Severity::color`].
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
            Severity::Warning => "#f59e0b",
            Severity::Info => "#3b82f6",
        }
    }
}

impl From<&str> for Severity {
    fn from(kind: &str) -> Self {
        Self::parse(kind)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display and transition durations of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// Time from creation until the exit transition starts.
    pub display: Duration,
    /// Length of the enter and exit transitions.
    pub transition: Duration,
}

impl ToastTiming {
    /// Builds a timing from milliseconds, clamping to the configured bounds.
    #[must_use]
    pub fn from_millis(display_ms: u64, transition_ms: u64) -> Self {
        use crate::config::{MAX_TOAST_DISPLAY_MS, MAX_TOAST_TRANSITION_MS, MIN_TOAST_DISPLAY_MS};
        Self {
            display: Duration::from_millis(
                display_ms.clamp(MIN_TOAST_DISPLAY_MS, MAX_TOAST_DISPLAY_MS),
            ),
            transition: Duration::from_millis(transition_ms.min(MAX_TOAST_TRANSITION_MS)),
        }
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        use crate::config::{DEFAULT_TOAST_DISPLAY_MS, DEFAULT_TOAST_TRANSITION_MS};
        Self::from_millis(DEFAULT_TOAST_DISPLAY_MS, DEFAULT_TOAST_TRANSITION_MS)
    }
}

/// Scheduled exit and removal instants of one toast.
///
/// Cancelling the schedule moves the exit to the cancellation instant, so the
/// toast still plays its exit transition before it is removed. A toast that
/// is only partly visible fades out from where it is, over the matching share
/// of the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissSchedule {
    exit_at: Instant,
    remove_at: Instant,
    transition: Duration,
    cancelled: bool,
}

impl DismissSchedule {
    #[must_use]
    pub fn new(created_at: Instant, timing: ToastTiming) -> Self {
        let exit_at = created_at + timing.display;
        Self {
            exit_at,
            remove_at: exit_at + timing.transition,
            transition: timing.transition,
            cancelled: false,
        }
    }

    /// Starts the exit transition at `now` if it has not started yet.
    ///
    /// `visibility` is how visible the toast is at `now`; the exit picks up
    /// at that point instead of restarting from fully visible. Returns
    /// `false` when the toast was already leaving.
    pub fn cancel(&mut self, now: Instant, visibility: f32) -> bool {
        if self.cancelled || now >= self.exit_at {
            return false;
        }
        let visibility = visibility.clamp(0.0, 1.0);
        let faded = (self.transition.as_nanos() as f64 * f64::from(1.0 - visibility)).round();
        let elapsed = Duration::from_nanos(faded as u64);
        self.cancelled = true;
        self.exit_at = now.checked_sub(elapsed).unwrap_or(now);
        self.remove_at = self.exit_at + self.transition;
        true
    }

    #[must_use]
    pub fn exit_at(&self) -> Instant {
        self.exit_at
    }

    #[must_use]
    pub fn remove_at(&self) -> Instant {
        self.remove_at
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.remove_at
    }
}

/// Where a toast is in its lifecycle at a given instant.
///
/// Progress values run from `0.0` (transition start) to `1.0` (end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Entering(f32),
    Shown,
    Exiting(f32),
    Expired,
}

impl Phase {
    /// How opaque the toast is, `1.0` meaning fully visible.
    #[must_use]
    pub fn visibility(self) -> f32 {
        match self {
            Phase::Entering(progress) => progress,
            Phase::Shown => 1.0,
            Phase::Exiting(progress) => 1.0 - progress,
            Phase::Expired => 0.0,
        }
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Plain text; never interpreted as markup.
    message: String,
    created_at: Instant,
    schedule: DismissSchedule,
}

impl Notification {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        created_at: Instant,
        timing: ToastTiming,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at,
            schedule: DismissSchedule::new(created_at, timing),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn schedule(&self) -> &DismissSchedule {
        &self.schedule
    }

    /// Starts the exit transition at `now`, fading from the current opacity.
    ///
    /// Returns `false` when the toast was already leaving.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        let visibility = self.phase(now).visibility();
        self.schedule.cancel(now, visibility)
    }

    /// Lifecycle phase at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        let transition = self.schedule.transition;
        if self.schedule.is_due(now) {
            return Phase::Expired;
        }
        if now >= self.schedule.exit_at {
            return Phase::Exiting(progress(now - self.schedule.exit_at, transition));
        }
        let age = now.saturating_duration_since(self.created_at);
        if age < transition {
            Phase::Entering(progress(age, transition))
        } else {
            Phase::Shown
        }
    }
}
