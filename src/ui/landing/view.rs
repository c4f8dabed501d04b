// SPDX-License-Identifier: MPL-2.0
//! Rendering of the landing screen.

use super::content::{
    FeatureEntry, FeatureIcon, RemixPrompt, RemixTone, FEATURES, FOOTER_COLUMNS, QUIZ_EXAMPLE,
    REMIX_PROMPTS, SOCIAL_LINKS, SUMMARY_EXAMPLE,
};
use super::{CtaSource, DemoKey, Message, State, SCROLLABLE_ID};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::{Style as FontStyle, Weight},
    widget::{button, rule, scrollable, Column, Container, Id, Row, Text},
    Color, Element, Font, Length,
};

/// Contextual data needed to render the landing screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Year printed in the copyright line.
    pub year: i32,
}

/// Fluent key of the one-line product description shown above the headline.
const HERO_TAGLINE_KEY: &str = "page-description";

type ContainerStyle = fn(&iced::Theme) -> iced::widget::container::Style;

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

const EXTRA_BOLD: Font = Font {
    weight: Weight::ExtraBold,
    ..Font::DEFAULT
};

const ITALIC: Font = Font {
    style: FontStyle::Italic,
    ..Font::DEFAULT
};

/// Render the landing screen.
#[must_use]
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let page = Column::new()
        .width(Length::Fill)
        .push(build_hero(&ctx))
        .push(build_features(state, &ctx))
        .push(build_demos(state, &ctx))
        .push(build_remix(&ctx))
        .push(build_learning(&ctx))
        .push(build_cta(&ctx))
        .push(build_footer(&ctx));

    scrollable(page)
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Fluent key of the preview pane text.
pub(super) fn preview_label_key(is_playing: bool) -> &'static str {
    if is_playing {
        "demos-running"
    } else {
        "demos-idle"
    }
}

/// Fluent key of the play/pause toggle label.
pub(super) fn toggle_label_key(is_playing: bool) -> &'static str {
    if is_playing {
        "demos-pause"
    } else {
        "demos-play"
    }
}

// =============================================================================
// Sections
// =============================================================================

fn build_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let headline = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("hero-title-lead"))
                .size(typography::DISPLAY)
                .font(EXTRA_BOLD),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-title-accent"))
                .size(typography::DISPLAY)
                .font(EXTRA_BOLD)
                .style(styles::text::accent),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-title-tail"))
                .size(typography::DISPLAY)
                .font(EXTRA_BOLD),
        )
        .wrap();

    let subtitle = Container::new(
        Text::new(ctx.i18n.tr("hero-subtitle"))
            .size(typography::BODY_LG)
            .style(styles::text::muted),
    )
    .max_width(680.0);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta-launch")).size(typography::BODY))
                .padding([spacing::MD, spacing::XL])
                .style(styles::button::primary)
                .on_press(Message::LaunchEditor(CtaSource::Hero)),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta-learn-more")).size(typography::BODY))
                .padding([spacing::MD, spacing::XL])
                .style(styles::button::secondary)
                .on_press(Message::LearnMore),
        );

    let tagline = Text::new(ctx.i18n.tr(HERO_TAGLINE_KEY))
        .size(typography::CAPTION)
        .style(styles::text::accent);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(tagline)
        .push(headline)
        .push(subtitle)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::hero)
        .into()
}

fn build_features<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = FEATURES
        .into_iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XL), |row, (index, feature)| {
            row.push(feature_card(feature, state.is_feature_highlighted(index)))
        });

    section(
        ctx.i18n.tr("features-title"),
        ctx.i18n.tr("features-subtitle"),
        cards.into(),
        false,
    )
}

fn feature_card<'a>(feature: FeatureEntry, highlighted: bool) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(icon_badge(
            feature.icon.glyph(),
            palette::PRIMARY_100,
            palette::PRIMARY_600,
        ))
        .push(
            Text::new(feature.title)
                .size(typography::TITLE_MD)
                .font(BOLD),
        )
        .push(Text::new(feature.description).style(styles::text::muted));

    Container::new(content)
        .padding(spacing::XL)
        .width(Length::FillPortion(1))
        .style(styles::container::card(highlighted))
        .into()
}

fn build_demos<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = state.active_demo();

    let tabs = DemoKey::ALL.into_iter().fold(
        Column::new().spacing(spacing::XS).push(
            Text::new(ctx.i18n.tr("demos-formats-heading"))
                .size(typography::TITLE_SM)
                .font(BOLD)
                .color(palette::WHITE),
        ),
        |column, key| {
            column.push(
                button(Text::new(key.entry().title))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::format_tab(key == active))
                    .on_press(Message::SelectDemo(key)),
            )
        },
    );

    let sidebar = Container::new(tabs)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::FORMAT_SIDEBAR_WIDTH))
        .style(styles::container::dark_panel);

    let entry = state.active_entry();
    let header = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::LG)
        .push(Text::new(entry.title).size(typography::TITLE_MD).font(BOLD))
        .push(Text::new(entry.description).style(styles::text::muted));

    let toggle = Container::new(
        button(Text::new(ctx.i18n.tr(toggle_label_key(state.is_playing()))))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::play_toggle)
            .on_press(Message::TogglePlay),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right);

    let code = Container::new(
        Column::new().spacing(spacing::SM).push(toggle).push(
            Text::new(entry.code)
                .size(typography::CODE)
                .font(Font::MONOSPACE),
        ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::dark_panel);

    let detail = Column::new()
        .width(Length::Fill)
        .push(header)
        .push(rule::horizontal(1))
        .push(code)
        .push(build_preview(state.is_playing(), ctx));

    let viewer = Container::new(Row::new().push(sidebar).push(detail))
        .width(Length::Fill)
        .clip(true)
        .style(styles::container::demo_frame);

    section(
        ctx.i18n.tr("demos-title"),
        ctx.i18n.tr("demos-subtitle"),
        viewer.into(),
        true,
    )
}

fn build_preview<'a>(is_playing: bool, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(preview_label_key(is_playing)));

    let (content, style): (Element<'a, Message>, ContainerStyle) = if is_playing {
        (label.into(), styles::container::preview_running)
    } else {
        let badge = Container::new(
            Text::new(FeatureIcon::Play.glyph())
                .size(typography::TITLE_LG)
                .color(palette::GRAY_400),
        )
        .width(Length::Fixed(sizing::PLAY_BADGE))
        .height(Length::Fixed(sizing::PLAY_BADGE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::badge(palette::GRAY_200, palette::GRAY_400));

        (
            Column::new()
                .spacing(spacing::MD)
                .align_x(Horizontal::Center)
                .push(badge)
                .push(label)
                .into(),
            styles::container::preview_idle,
        )
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(style)
        .into()
}

fn build_remix<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = REMIX_PROMPTS
        .into_iter()
        .fold(Row::new().spacing(spacing::XL), |row, prompt| {
            row.push(remix_card(prompt, ctx))
        });

    section(
        ctx.i18n.tr("remix-title"),
        ctx.i18n.tr("remix-subtitle"),
        cards.into(),
        false,
    )
}

fn remix_tone_colors(tone: RemixTone) -> (Color, Color) {
    match tone {
        RemixTone::Purple => (palette::PURPLE_100, palette::ACCENT_600),
        RemixTone::Blue => (palette::PRIMARY_100, palette::PRIMARY_600),
        RemixTone::Green => (palette::GREEN_100, palette::GREEN_600),
    }
}

fn remix_card<'a>(prompt: RemixPrompt, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (tint, accent) = remix_tone_colors(prompt.tone);
    let number = prompt.number.to_string();

    // No handler: remixing happens inside the editor.
    let try_button = button(Text::new(
        ctx.i18n.tr_with_args("remix-try", &[("number", number.as_str())]),
    ))
    .padding(0.0)
    .style(styles::button::link(accent));

    let content = Column::new()
        .spacing(spacing::SM)
        .push(icon_badge(number.clone(), palette::WHITE, accent))
        .push(Text::new(prompt.title).size(typography::TITLE_MD).font(BOLD))
        .push(Text::new(prompt.description).style(styles::text::muted))
        .push(try_button);

    Container::new(content)
        .padding(spacing::XL)
        .width(Length::FillPortion(1))
        .style(styles::container::tinted_card(tint))
        .into()
}

fn build_learning<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let summary = Column::new()
        .spacing(spacing::MD)
        .push(card_heading(
            FeatureIcon::Code,
            SUMMARY_EXAMPLE.title,
            palette::PRIMARY_100,
            palette::PRIMARY_600,
        ))
        .push(Text::new(SUMMARY_EXAMPLE.description).style(styles::text::muted))
        .push(
            Container::new(Text::new(SUMMARY_EXAMPLE.excerpt).font(ITALIC))
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::inset(false)),
        );

    let options = QUIZ_EXAMPLE.options.iter().enumerate().fold(
        Column::new().spacing(spacing::XS),
        |column, (index, option)| {
            column.push(
                Container::new(Text::new(*option))
                    .padding(spacing::XS)
                    .width(Length::Fill)
                    .style(styles::container::inset(index == QUIZ_EXAMPLE.correct)),
            )
        },
    );

    let quiz = Column::new()
        .spacing(spacing::MD)
        .push(card_heading(
            FeatureIcon::Play,
            QUIZ_EXAMPLE.title,
            palette::PURPLE_100,
            palette::ACCENT_600,
        ))
        .push(Text::new(QUIZ_EXAMPLE.description).style(styles::text::muted))
        .push(
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new(QUIZ_EXAMPLE.question).font(BOLD))
                    .push(options),
            )
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::container::inset(false)),
        );

    let cards = Row::new()
        .spacing(spacing::XXL)
        .push(
            Container::new(summary)
                .padding(spacing::XL)
                .width(Length::FillPortion(1))
                .style(styles::container::card(false)),
        )
        .push(
            Container::new(quiz)
                .padding(spacing::XL)
                .width(Length::FillPortion(1))
                .style(styles::container::card(false)),
        );

    section(
        ctx.i18n.tr("learning-title"),
        ctx.i18n.tr("learning-subtitle"),
        cards.into(),
        true,
    )
}

fn build_cta<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("cta-title"))
                .size(typography::TITLE_LG)
                .font(EXTRA_BOLD),
        )
        .push(Text::new(ctx.i18n.tr("cta-subtitle")).size(typography::BODY_LG))
        .push(
            button(Text::new(ctx.i18n.tr("cta-launch")).font(BOLD))
                .padding([spacing::MD, spacing::XL])
                .style(styles::button::inverted)
                .on_press(Message::LaunchEditor(CtaSource::Closing)),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::cta_band)
        .into()
}

fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let socials = SOCIAL_LINKS
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, name| {
            row.push(Text::new(*name).size(typography::CAPTION))
        });

    let brand = Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(1))
        .push(footer_heading(ctx.i18n.tr("footer-brand")))
        .push(Text::new(ctx.i18n.tr("footer-tagline")))
        .push(socials);

    let columns = FOOTER_COLUMNS
        .iter()
        .fold(Row::new().spacing(spacing::XL).push(brand), |row, column| {
            let links = column
                .links
                .iter()
                .fold(Column::new().spacing(spacing::XS), |links, link| {
                    links.push(Text::new(*link))
                });
            row.push(
                Column::new()
                    .spacing(spacing::MD)
                    .width(Length::FillPortion(1))
                    .push(footer_heading(column.heading))
                    .push(links),
            )
        });

    let year = ctx.year.to_string();
    let copyright = Container::new(Text::new(
        ctx.i18n
            .tr_with_args("footer-copyright", &[("year", year.as_str())]),
    ))
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let content = Column::new()
        .spacing(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(columns)
        .push(rule::horizontal(1))
        .push(copyright);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::footer)
        .into()
}

// =============================================================================
// Building blocks
// =============================================================================

/// Section band with a centered heading, subtitle and body.
fn section<'a>(
    title: String,
    subtitle: String,
    body: Element<'a, Message>,
    alternate: bool,
) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .font(EXTRA_BOLD),
        )
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .style(styles::text::muted),
        );

    let content = Column::new()
        .spacing(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading)
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::section(alternate))
        .into()
}

fn icon_badge<'a>(
    glyph: impl iced::widget::text::IntoFragment<'a>,
    background: Color,
    foreground: Color,
) -> Element<'a, Message> {
    Container::new(Text::new(glyph).size(typography::TITLE_MD).font(BOLD))
        .width(Length::Fixed(sizing::ICON_BADGE))
        .height(Length::Fixed(sizing::ICON_BADGE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::badge(background, foreground))
        .into()
}

fn card_heading<'a>(
    icon: FeatureIcon,
    title: &'static str,
    background: Color,
    foreground: Color,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(icon_badge(icon.glyph(), background, foreground))
        .push(Text::new(title).size(typography::TITLE_MD).font(BOLD))
        .into()
}

fn footer_heading<'a>(title: impl iced::widget::text::IntoFragment<'a>) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::TITLE_SM)
        .font(BOLD)
        .color(palette::WHITE)
        .into()
}
