// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native keyboard events to the active
//! screen based on the current application state.

use super::{Message, Screen};
use crate::ui::detail;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the appropriate event subscription based on the current screen.
///
/// Only the detail screen listens for keyboard shortcuts:
/// - Left / Right arrows page through the gallery
/// - Escape closes the lightbox, or returns to the catalog
///
/// The grid navigates by pointer alone, so it subscribes to nothing.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Detail => event::listen_with(|event, status, _window_id| {
            let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event else {
                return None;
            };

            let message = match key {
                Key::Named(Named::ArrowLeft) => Message::Detail(detail::Message::PreviousPressed),
                Key::Named(Named::ArrowRight) => Message::Detail(detail::Message::NextPressed),
                Key::Named(Named::Escape) => Message::Detail(detail::Message::EscapePressed),
                _ => return None,
            };

            // Keys already consumed by a focused widget are left alone
            match status {
                event::Status::Ignored => Some(message),
                event::Status::Captured => None,
            }
        }),
        Screen::Grid => Subscription::none(),
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// The tick only runs while at least one toast is alive, so an idle
/// storefront window never wakes up for it.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
