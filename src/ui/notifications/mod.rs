// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications carry an i18n message key plus a severity; the [`Manager`]
//! caps how many are visible at once and handles auto-dismiss, and
//! [`Toast`] renders them as cards in the bottom-right corner.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
