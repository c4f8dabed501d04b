// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes `Message`, an `Event` for its parent, `update` and `view`.
//!
//! # Screens
//!
//! - [`landing`] - Marketing page with feature rotation and format samples
//! - [`editor`] - Editor entry point reached from the landing calls to action
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod editor;
pub mod landing;
pub mod styles;
pub mod theming;
