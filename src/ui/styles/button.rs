// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action (solid brand blue).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        _ => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::LG
        } else {
            shadow::MD
        },
        snap: true,
    }
}

/// Secondary action next to a primary one (page surface with border).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let surface = match status {
        button::Status::Hovered | button::Status::Pressed => extended.background.weak,
        _ => extended.background.base,
    };

    button::Style {
        background: Some(Background::Color(surface.color)),
        text_color: surface.text,
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// White button on the brand gradient band.
pub fn inverted(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_100,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::PRIMARY_600,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// Format tab in the dark sidebar; the active tab is filled with brand blue.
pub fn format_tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if active {
            (Some(Background::Color(palette::PRIMARY_600)), WHITE)
        } else if matches!(status, button::Status::Hovered) {
            (Some(Background::Color(palette::GRAY_800)), palette::GRAY_300)
        } else {
            (None, palette::GRAY_300)
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round play/pause toggle floating over the code sample.
pub fn play_toggle(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        _ => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// Text-only button tinted with `color`; darkens on hover.
pub fn link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                r: color.r * 0.75,
                g: color.g * 0.75,
                b: color.b * 0.75,
                ..color
            },
            _ => color,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
