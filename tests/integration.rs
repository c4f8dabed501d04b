// SPDX-License-Identifier: MPL-2.0
use microsim_landing::app::{App, Message, Screen};
use microsim_landing::config::{self, Config, GeneralConfig, WindowConfig};
use microsim_landing::i18n::fluent::I18n;
use microsim_landing::ui::editor;
use microsim_landing::ui::landing::{self, CtaSource, DemoKey, FEATURES};
use microsim_landing::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        window: WindowConfig::default(),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("hero-cta-launch"), "Launch MicroSim Editor");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..initial_config.general
        },
        ..initial_config
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("hero-cta-launch"), "Lancer l'éditeur MicroSim");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_wins_over_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn corrupt_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("Failed to write corrupt config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn footer_year_is_interpolated() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let line = i18n.tr_with_args("footer-copyright", &[("year", "2031")]);
    assert_eq!(line, "© 2031 MicroSim Learning. All rights reserved.");
}

#[test]
fn landing_round_trip_through_editor() {
    let config = Config::default();
    let mut app = App::from_parts(&config, I18n::new(Some("en-US".to_string()), &config));

    for _ in 0..FEATURES.len() + 1 {
        let _ = app.update(Message::Landing(landing::Message::RotateFeature));
    }
    let _ = app.update(Message::Landing(landing::Message::SelectDemo(
        DemoKey::Threejs,
    )));
    let state = app.landing().expect("landing mounted");
    assert_eq!(state.current_feature(), 1);
    assert_eq!(state.active_entry().title, "Three.js 3D Models");

    let _ = app.update(Message::Landing(landing::Message::LaunchEditor(
        CtaSource::Closing,
    )));
    assert_eq!(app.screen(), Screen::Editor);
    assert_eq!(app.rotation_interval(), None);

    let _ = app.update(Message::Editor(editor::Message::BackToLanding));
    let state = app.landing().expect("landing mounted again");
    assert_eq!(state.current_feature(), 0);
    assert_eq!(state.active_demo(), DemoKey::P5js);
}
