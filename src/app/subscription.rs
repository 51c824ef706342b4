// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::config::PROGRESS_TICK_MS;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes files dropped on the window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = event {
            return Some(Message::FileDropped(path));
        }
        None
    })
}

/// Progress timer, alive only while a submission is in flight.
///
/// Dropping the subscription when the submission settles stops the timer.
pub fn create_progress_subscription(is_submitting: bool) -> Subscription<Message> {
    if is_submitting {
        time::every(Duration::from_millis(PROGRESS_TICK_MS)).map(Message::ProgressTick)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
