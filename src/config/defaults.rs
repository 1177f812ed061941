// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration options.

use crate::ui::theming::ThemeMode;

/// Base URL of the wallpaper generation backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Wire value of the default aspect ratio (phone portrait).
pub const DEFAULT_ASPECT_RATIO: &str = "9:16";

pub fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

pub fn default_api_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}
