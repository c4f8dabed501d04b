// SPDX-License-Identifier: MPL-2.0
//! Editor entry point screen.
//!
//! The visualization editor itself is provided by the main MicroSim
//! application. This screen marks the navigation target and offers a way
//! back to the landing screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::landing::Route;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the editor entry screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the editor entry screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToLanding,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToLanding,
}

/// Process an editor entry message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToLanding => Event::BackToLanding,
    }
}

/// Render the editor entry screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let note = ctx
        .i18n
        .tr_with_args("editor-placeholder", &[("path", Route::Editor.path())]);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("editor-title")).size(typography::TITLE_LG))
        .push(Text::new(note).size(typography::BODY))
        .push(
            button(Text::new(ctx.i18n.tr("editor-back")).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::secondary)
                .on_press(Message::BackToLanding),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
