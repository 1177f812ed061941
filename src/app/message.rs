// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{GenerationResponse, Wallpaper};
use crate::error::Error;
use crate::ui::about;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::studio;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Studio(studio::Message),
    Settings(settings::Message),
    About(about::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// The generation backend answered (or failed). Carries the request
    /// sequence so stale completions can be discarded.
    GenerationCompleted {
        seq: u64,
        result: Result<GenerationResponse, Error>,
    },
    /// The generated image bytes were fetched (or failed to fetch).
    WallpaperFetched {
        seq: u64,
        result: Result<Wallpaper, Error>,
    },
    /// Result from the save dialog; `None` when the user cancelled.
    DownloadDialogResult(Option<PathBuf>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional generation backend URL override.
    pub api_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `WALLFORGE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over the `WALLFORGE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
