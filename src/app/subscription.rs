// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.
//!
//! Both subscriptions are conditional so an idle app schedules nothing.

use super::Message;
use crate::ui::studio;
use iced::{time, Subscription};
use std::time::Duration;

/// Periodic tick for notification auto-dismiss.
///
/// Only active while notifications are visible or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Spinner animation frames while a generation request is in flight.
pub fn create_spinner_subscription(is_generating: bool) -> Subscription<Message> {
    if is_generating {
        // Animate spinner at 60 FPS while loading
        time::every(Duration::from_millis(16))
            .map(|_| Message::Studio(studio::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
