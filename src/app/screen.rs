// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::landing::Route;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Editor,
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Editor => Screen::Editor,
        }
    }
}
