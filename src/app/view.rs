// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::editor::{self, ViewContext as EditorViewContext};
use crate::ui::landing::{self, ViewContext as LandingViewContext};
use iced::{
    widget::{Container, Space},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub landing: Option<&'a landing::State>,
    /// Year shown in the footer copyright line.
    pub year: i32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Landing => view_landing(ctx.landing, ctx.i18n, ctx.year),
        Screen::Editor => editor::view(EditorViewContext { i18n: ctx.i18n }).map(Message::Editor),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_landing<'a>(
    state: Option<&'a landing::State>,
    i18n: &'a I18n,
    year: i32,
) -> Element<'a, Message> {
    match state {
        Some(state) => landing::view(state, LandingViewContext { i18n, year }).map(Message::Landing),
        // Only reachable for a single frame while a screen switch settles.
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    }
}
