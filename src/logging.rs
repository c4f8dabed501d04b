// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging setup.
//!
//! Output goes to stderr through `tracing-subscriber`. The filter is read from
//! `RUST_LOG` and defaults to `info`, e.g. `RUST_LOG=microsim_landing=debug`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_target(false)
        .try_init()
        .is_ok()
}
