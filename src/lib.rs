// SPDX-License-Identifier: MPL-2.0
//! `microsim_landing` is the desktop landing screen of MicroSim, a tool that
//! turns Wikipedia articles, images and text into interactive educational
//! visualizations.
//!
//! It presents the product, cycles a feature highlight, previews the
//! supported visualization formats, and routes the user to the editor. The UI
//! is built with Iced, localized with Fluent, and configured through a
//! `settings.toml` file.

#![doc(html_root_url = "https://docs.rs/microsim_landing/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod ui;
