// SPDX-License-Identifier: MPL-2.0
//! Container styles for the landing sections.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Degrees, Gradient, Theme};

fn brand_gradient(alpha: f32) -> Background {
    let from = Color {
        a: alpha,
        ..palette::PRIMARY_600
    };
    let to = Color {
        a: alpha,
        ..palette::ACCENT_600
    };
    Background::Gradient(Gradient::Linear(
        gradient::Linear::new(Degrees(90.0))
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}

/// Hero band: faint brand gradient over the page background.
pub fn hero(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(brand_gradient(if extended.is_dark { 0.35 } else { 0.2 })),
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Full-width section band; `alternate` sections use the weak surface.
pub fn section(alternate: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let background = &theme.extended_palette().background;
        let surface = if alternate {
            background.weak
        } else {
            background.base
        };

        container::Style {
            background: Some(Background::Color(surface.color)),
            text_color: Some(surface.text),
            ..Default::default()
        }
    }
}

/// Card surface; a highlighted card carries the brand ring.
pub fn card(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let background = &theme.extended_palette().background;

        container::Style {
            background: Some(Background::Color(background.weak.color)),
            text_color: Some(background.weak.text),
            border: if highlighted {
                Border {
                    color: palette::PRIMARY_500,
                    width: border::WIDTH_MD,
                    radius: radius::LG.into(),
                }
            } else {
                Border {
                    color: background.strong.color,
                    width: border::WIDTH_SM,
                    radius: radius::LG.into(),
                }
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Card with a soft tint, used for remix prompts. On dark themes the tint is
/// laid thinly over the page surface.
pub fn tinted_card(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let (background, text_color) = if extended.is_dark {
            (Color { a: 0.15, ..tint }, extended.background.base.text)
        } else {
            (tint, palette::GRAY_900)
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                color: extended.background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Square badge behind an icon glyph or number.
pub fn badge(background: Color, foreground: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(foreground),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Dark surface for the format sidebar and code sample.
pub fn dark_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_300),
        ..Default::default()
    }
}

/// Outer frame of the demo viewer.
pub fn demo_frame(theme: &Theme) -> container::Style {
    let surface = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(surface.color)),
        text_color: Some(surface.text),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Preview pane while the toggle is on.
pub fn preview_running(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Preview pane while the toggle is off.
pub fn preview_idle(theme: &Theme) -> container::Style {
    let surface = theme.extended_palette().background.weak;

    container::Style {
        background: Some(Background::Color(surface.color)),
        text_color: Some(surface.text),
        ..Default::default()
    }
}

/// Rounded inset inside a card (quotes, quiz options); the highlighted inset
/// marks the correct quiz answer.
pub fn inset(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let surface = if highlighted {
            extended.primary.weak
        } else {
            extended.background.base
        };

        container::Style {
            background: Some(Background::Color(surface.color)),
            text_color: Some(surface.text),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Full-strength brand gradient band behind the closing call to action.
pub fn cta_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(brand_gradient(1.0)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_400),
        ..Default::default()
    }
}
