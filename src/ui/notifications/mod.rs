// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Non-blocking feedback for things that do not belong in the result panel:
//! a rejected file, an unreadable file, a broken settings file, or an
//! endpoint URL that had to be replaced by the default.
//!
//! - [`notification`] - `Notification` value with severity and i18n key
//! - [`manager`] - `Manager` queuing, timing, and dismissal
//! - [`toast`] - rendering of the visible notifications
//!
//! Warnings dismiss after 5s, errors stay until dismissed. At most three
//! toasts are shown at once.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
