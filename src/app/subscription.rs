// SPDX-License-Identifier: MPL-2.0
//! Frame ticks for toasts, the spinner and pending debounced input.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between animation frames while something is moving.
pub const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Ticks only while timed state is pending, so an idle window stays idle.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
