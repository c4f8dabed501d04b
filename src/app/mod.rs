// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the landing and editor
//! screens.
//!
//! The `App` struct owns localization, the active screen and the landing
//! state. The landing state exists only while the landing screen is shown:
//! leaving drops it (and with it the feature rotation timer), coming back
//! mounts a fresh one.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, WindowConfig};
use crate::config::defaults::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::i18n::fluent::I18n;
use crate::ui::landing;
use crate::ui::theming::ThemeMode;
use chrono::Datelike;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Present exactly while `screen == Screen::Landing`.
    landing: Option<landing::State>,
    window: WindowConfig,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("landing_mounted", &self.landing.is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_parts(&Config::default(), I18n::default())
    }
}

/// Builds the window settings from the persisted window preferences.
pub fn window_settings(window: &WindowConfig) -> window::Settings {
    let (width, height) = window.effective_size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    let settings = window_settings(&config.window);

    // iced 0.14 requires a `Fn` boot closure; the startup data is consumed once.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, warning) = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| (Flags::default(), Config::default(), None));
        App::new(flags, &config, warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }
        tracing::info!(locale = %i18n.current_locale(), "application started");

        (Self::from_parts(config, i18n), Task::none())
    }

    /// Assembles the application on the landing screen.
    #[must_use]
    pub fn from_parts(config: &Config, i18n: I18n) -> Self {
        Self {
            i18n,
            screen: Screen::Landing,
            theme_mode: config.general.theme_mode,
            landing: Some(landing::State::new()),
            window: config.window.clone(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn landing(&self) -> Option<&landing::State> {
        self.landing.as_ref()
    }

    /// Window size the application was configured with.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        self.window.effective_size()
    }

    /// Period of the feature rotation timer, `None` when it is not running.
    #[must_use]
    pub fn rotation_interval(&self) -> Option<Duration> {
        self.landing.as_ref().map(|_| landing::ROTATION_INTERVAL)
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Landing => app_name,
            Screen::Editor => format!("{} - {app_name}", self.i18n.tr("editor-title")),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_rotation_subscription(self.landing.as_ref())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            landing: &mut self.landing,
        };

        match message {
            Message::Landing(message) => update::handle_landing_message(&mut ctx, message),
            Message::Editor(message) => update::handle_editor_message(&mut ctx, &message),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            landing: self.landing.as_ref(),
            year: chrono::Local::now().year(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::editor;
    use crate::ui::landing::{CtaSource, DemoKey};

    fn english_app() -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".into()), &config);
        App::from_parts(&config, i18n)
    }

    fn launch(app: &mut App) {
        let _ = app.update(Message::Landing(landing::Message::LaunchEditor(
            CtaSource::Hero,
        )));
    }

    #[test]
    fn starts_on_landing_with_rotation_running() {
        let app = english_app();
        assert_eq!(app.screen(), Screen::Landing);
        assert!(app.landing().is_some());
        assert_eq!(app.rotation_interval(), Some(Duration::from_millis(5000)));
    }

    #[test]
    fn launching_editor_unmounts_landing_and_stops_rotation() {
        let mut app = english_app();
        launch(&mut app);
        assert_eq!(app.screen(), Screen::Editor);
        assert!(app.landing().is_none());
        assert_eq!(app.rotation_interval(), None);
    }

    #[test]
    fn closing_cta_also_launches_editor() {
        let mut app = english_app();
        let _ = app.update(Message::Landing(landing::Message::LaunchEditor(
            CtaSource::Closing,
        )));
        assert_eq!(app.screen(), Screen::Editor);
    }

    #[test]
    fn stale_rotation_tick_after_unmount_is_ignored() {
        let mut app = english_app();
        launch(&mut app);
        let _ = app.update(Message::Landing(landing::Message::RotateFeature));
        assert_eq!(app.screen(), Screen::Editor);
        assert!(app.landing().is_none());
    }

    #[test]
    fn returning_to_landing_starts_from_initial_state() {
        let mut app = english_app();
        let _ = app.update(Message::Landing(landing::Message::SelectDemo(
            DemoKey::D3js,
        )));
        let _ = app.update(Message::Landing(landing::Message::TogglePlay));
        let _ = app.update(Message::Landing(landing::Message::RotateFeature));
        launch(&mut app);

        let _ = app.update(Message::Editor(editor::Message::BackToLanding));

        let state = app.landing().expect("landing should be mounted again");
        assert_eq!(app.screen(), Screen::Landing);
        assert_eq!(state.active_demo(), DemoKey::P5js);
        assert!(!state.is_playing());
        assert_eq!(state.current_feature(), 0);
        assert!(app.rotation_interval().is_some());
    }

    #[test]
    fn landing_messages_update_mounted_state() {
        let mut app = english_app();
        let _ = app.update(Message::Landing(landing::Message::RotateFeature));
        let _ = app.update(Message::Landing(landing::Message::SelectDemo(
            DemoKey::Mermaidjs,
        )));
        let state = app.landing().expect("landing mounted");
        assert_eq!(state.current_feature(), 1);
        assert_eq!(state.active_demo(), DemoKey::Mermaidjs);
    }

    #[test]
    fn learn_more_keeps_landing_mounted() {
        let mut app = english_app();
        let _ = app.update(Message::Landing(landing::Message::LearnMore));
        assert_eq!(app.screen(), Screen::Landing);
        assert!(app.landing().is_some());
    }

    #[test]
    fn title_depends_on_screen() {
        let mut app = english_app();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        launch(&mut app);
        let title = app.title();
        assert!(title.starts_with(&app.i18n.tr("editor-title")));
        assert!(title.ends_with(&app.i18n.tr("window-title")));
    }

    #[test]
    fn theme_follows_configured_mode() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let app = App::from_parts(&config, I18n::default());
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn window_size_is_clamped_to_minimum() {
        let mut config = Config::default();
        config.window.width = Some(100);
        config.window.height = Some(100);
        let app = App::from_parts(&config, I18n::default());
        assert_eq!(app.window_size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn both_screens_render() {
        let mut app = english_app();
        let _ = app.view();
        launch(&mut app);
        let _ = app.view();
    }
}
