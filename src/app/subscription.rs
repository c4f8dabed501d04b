// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.

use super::Message;
use crate::ui::landing;
use iced::Subscription;

/// Feature rotation timer for the mounted landing screen.
///
/// Returning `Subscription::none()` once the landing state is gone makes the
/// runtime stop the recurring timer, so no tick outlives the screen.
pub fn create_rotation_subscription(landing: Option<&landing::State>) -> Subscription<Message> {
    match landing {
        Some(state) => state.subscription().map(Message::Landing),
        None => Subscription::none(),
    }
}
