// SPDX-License-Identifier: MPL-2.0
//! Landing screen: hero, rotating feature highlight, visualization format
//! samples with a play toggle, promotional cards and footer.
//!
//! All state is local to [`State`] and lives exactly as long as the screen is
//! mounted. The parent drops the state on navigation, which also drops the
//! rotation timer returned by [`State::subscription`]; a new visit starts from
//! [`State::new`] again.

pub mod content;
pub mod rotation;
mod view;

pub use content::{DemoEntry, DemoKey, FeatureEntry, FEATURES};
pub use rotation::{FeatureRotation, ROTATION_INTERVAL};
pub use view::{view, ViewContext};

use crate::ui::design_tokens::sizing;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::{time, Subscription};

/// Id of the landing page scrollable, target of anchor scrolling.
pub const SCROLLABLE_ID: &str = "landing-scrollable";

/// Relative offset used for the features anchor before the scrollable has
/// reported its geometry.
const FEATURES_FALLBACK_OFFSET: f32 = 0.15;

/// Destinations the landing screen can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Main application/editor entry point.
    Editor,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Editor => "/home",
        }
    }
}

/// Which of the two launch buttons was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaSource {
    Hero,
    Closing,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectDemo(DemoKey),
    TogglePlay,
    /// Timer firing.
    RotateFeature,
    LaunchEditor(CtaSource),
    LearnMore,
    Scrolled(Viewport),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    None,
    Navigate(Route),
    ScrollToFeatures(RelativeOffset),
}

/// Scrollable geometry needed to locate the features section.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollExtent {
    content_height: f32,
    viewport_height: f32,
}

impl ScrollExtent {
    fn offset_of(&self, top: f32) -> RelativeOffset {
        let scrollable = self.content_height - self.viewport_height;
        let y = if scrollable <= 0.0 {
            0.0
        } else {
            (top / scrollable).clamp(0.0, 1.0)
        };
        RelativeOffset { x: 0.0, y }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    active_demo: DemoKey,
    is_playing: bool,
    rotation: FeatureRotation,
    scroll_extent: Option<ScrollExtent>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_demo: DemoKey::P5js,
            is_playing: false,
            rotation: FeatureRotation::new(FEATURES.len()),
            scroll_extent: None,
        }
    }

    #[must_use]
    pub fn active_demo(&self) -> DemoKey {
        self.active_demo
    }

    /// Entry rendered in the demo viewer.
    #[must_use]
    pub fn active_entry(&self) -> &'static DemoEntry {
        self.active_demo.entry()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Index into [`FEATURES`] of the highlighted card.
    #[must_use]
    pub fn current_feature(&self) -> usize {
        self.rotation.current()
    }

    #[must_use]
    pub fn is_feature_highlighted(&self, index: usize) -> bool {
        self.rotation.current() == index
    }

    pub fn select_demo(&mut self, key: DemoKey) {
        if self.active_demo != key {
            tracing::debug!(from = %self.active_demo, to = %key, "demo tab selected");
            self.active_demo = key;
        }
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        tracing::debug!(playing = self.is_playing, "preview toggled");
    }

    pub fn advance_feature(&mut self) {
        let index = self.rotation.advance();
        tracing::trace!(index, "feature highlight advanced");
    }

    /// Relative offset that brings the features section to the top.
    #[must_use]
    pub fn features_offset(&self) -> RelativeOffset {
        match self.scroll_extent {
            Some(extent) => extent.offset_of(sizing::HERO_HEIGHT),
            None => RelativeOffset {
                x: 0.0,
                y: FEATURES_FALLBACK_OFFSET,
            },
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SelectDemo(key) => {
                self.select_demo(key);
                Event::None
            }
            Message::TogglePlay => {
                self.toggle_play();
                Event::None
            }
            Message::RotateFeature => {
                self.advance_feature();
                Event::None
            }
            Message::LaunchEditor(source) => {
                tracing::debug!(?source, "launch button pressed");
                Event::Navigate(Route::Editor)
            }
            Message::LearnMore => Event::ScrollToFeatures(self.features_offset()),
            Message::Scrolled(viewport) => {
                self.scroll_extent = Some(ScrollExtent {
                    content_height: viewport.content_bounds().height,
                    viewport_height: viewport.bounds().height,
                });
                Event::None
            }
        }
    }

    /// Periodic feature rotation, active for as long as this state is mounted.
    pub fn subscription(&self) -> Subscription<Message> {
        time::every(ROTATION_INTERVAL).map(|_| Message::RotateFeature)
    }
}
