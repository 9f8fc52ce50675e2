// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts are short, non-blocking status messages stacked in the top-right
//! corner of the window. Each toast carries its own dismiss schedule: it is
//! displayed for 3 s, then plays a 300 ms exit transition and is removed.
//!
//! # Components
//!
//! - [`Notification`], [`Severity`] and the [`DismissSchedule`] of each toast
//! - [`Manager`], the lazily created toast container
//! - [`Toast`], the widget rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use pagekit::ui::notifications::{Manager, Severity};
//!
//! let mut manager = Manager::new();
//! manager.notify("Saved", Severity::Success, Instant::now());
//!
//! // On every tick
//! manager.tick(Instant::now());
//!
//! // In your view function
//! let toast_overlay = Toast::view_overlay(&manager, now).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    DismissSchedule, Notification, NotificationId, Phase, Severity, ToastTiming,
};
pub use toast::Toast;
