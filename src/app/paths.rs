// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Paths are resolved in the following priority order:
//! 1. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 2. **Environment variables** (`WALLFORGE_DATA_DIR`, `WALLFORGE_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.data_dir, flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "WallForge";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "WALLFORGE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "WALLFORGE_CONFIG_DIR";

/// Global CLI override for data directory (set once at startup).
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// Should be called once at application startup, before any path resolution.
/// Later calls are ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let _ = CLI_DATA_DIR.set(data_dir.map(PathBuf::from));
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory (for `settings.toml`).
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    if let Some(dir) = cli_config_dir() {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut p| {
        p.push(APP_NAME);
        p
    })
}

/// Returns the application data directory (for `state.toml`).
#[must_use]
pub fn get_app_data_dir() -> Option<PathBuf> {
    if let Some(dir) = cli_data_dir() {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::data_dir().map(|mut p| {
        p.push(APP_NAME);
        p
    })
}

/// Returns the user's download directory, used to seed the save dialog when
/// no save directory has been remembered yet.
#[must_use]
pub fn get_download_dir() -> Option<PathBuf> {
    dirs::download_dir()
}

/// Serializes tests that mutate directory environment variables.
#[cfg(test)]
pub(crate) fn test_env_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: OnceLock<std::sync::Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
}
