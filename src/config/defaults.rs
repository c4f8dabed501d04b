// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Locale**: Fallback language

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1100;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

/// Smallest width the landing layout is designed for.
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Smallest height the landing layout is designed for.
pub const MIN_WINDOW_HEIGHT: u32 = 560;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

const _: () = {
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
