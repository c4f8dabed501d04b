// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use iced::widget::text;
use iced::{Color, Theme};

/// Secondary copy (subtitles, card descriptions): the surface text color,
/// slightly faded.
pub fn muted(theme: &Theme) -> text::Style {
    let base = theme.extended_palette().background.base.text;

    text::Style {
        color: Some(Color { a: 0.75, ..base }),
    }
}

/// Brand-colored headline accent, lighter on dark themes.
pub fn accent(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().primary.strong.color),
    }
}
