// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component updates return events; the handlers here turn those events into
//! screen changes and widget operations.

use super::{Message, Screen};
use crate::ui::editor::{self, Event as EditorEvent};
use crate::ui::landing::{self, Event as LandingEvent};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable slices of `App` that message handlers are allowed to touch.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub landing: &'a mut Option<landing::State>,
}

/// Routes landing messages to the mounted landing state.
///
/// Messages that arrive after the landing screen was unmounted (a timer tick
/// already in flight, for example) are dropped.
pub fn handle_landing_message(
    ctx: &mut UpdateContext<'_>,
    message: landing::Message,
) -> Task<Message> {
    let Some(state) = ctx.landing.as_mut() else {
        tracing::trace!(?message, "landing message ignored while unmounted");
        return Task::none();
    };

    match state.update(message) {
        LandingEvent::None => Task::none(),
        LandingEvent::Navigate(route) => {
            tracing::info!(path = route.path(), "navigating away from landing");
            handle_screen_switch(ctx, Screen::from(route))
        }
        LandingEvent::ScrollToFeatures(offset) => scroll_landing_to(offset),
    }
}

pub fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: &editor::Message,
) -> Task<Message> {
    match editor::update(message) {
        EditorEvent::None => Task::none(),
        EditorEvent::BackToLanding => handle_screen_switch(ctx, Screen::Landing),
    }
}

/// Switches screens, mounting a fresh landing state when landing is entered.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }

    match target {
        Screen::Landing => {
            *ctx.landing = Some(landing::State::new());
        }
        Screen::Editor => {
            *ctx.landing = None;
        }
    }
    tracing::debug!(from = ?*ctx.screen, to = ?target, "screen switched");
    *ctx.screen = target;
    Task::none()
}

fn scroll_landing_to(offset: RelativeOffset) -> Task<Message> {
    tracing::debug!(y = offset.y, "scrolling to features section");
    operation::snap_to(Id::new(landing::SCROLLABLE_ID), offset)
}
