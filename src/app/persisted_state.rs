// SPDX-License-Identifier: MPL-2.0
//! Small persisted application state, separate from user preferences.
//!
//! Currently this only remembers the directory of the last saved wallpaper,
//! so the next save dialog opens where the user left off. Stored as
//! `state.toml` in the data directory (not the config directory: it is
//! derived convenience state, not a preference).

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.toml";

/// Warning key surfaced when the state file cannot be read or written.
pub const STATE_WARNING_KEY: &str = "notification-state-warning";

/// Persisted application state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppState {
    /// Directory of the most recent wallpaper save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_save_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads the persisted state, tolerating a missing or malformed file.
    #[must_use]
    pub fn load() -> (Self, Option<&'static str>) {
        match state_file_path() {
            Some(path) => Self::load_from_path(&path),
            None => (Self::default(), None),
        }
    }

    /// Loads the persisted state from an explicit path.
    #[must_use]
    pub fn load_from_path(path: &Path) -> (Self, Option<&'static str>) {
        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(state) => (state, None),
                Err(_) => (Self::default(), Some(STATE_WARNING_KEY)),
            },
            Err(_) => (Self::default(), Some(STATE_WARNING_KEY)),
        }
    }

    /// Saves the state, returning a warning key on failure instead of an error
    /// (losing the remembered directory is not worth interrupting the user).
    pub fn save(&self) -> Option<&'static str> {
        let Some(path) = state_file_path() else {
            return Some(STATE_WARNING_KEY);
        };

        match self.save_to_path(&path) {
            Ok(()) => None,
            Err(_) => Some(STATE_WARNING_KEY),
        }
    }

    /// Saves the state to an explicit path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Remembers the parent directory of a just-saved file.
    pub fn set_last_save_directory_from_file(&mut self, file: &Path) {
        self.last_save_directory = file.parent().map(Path::to_path_buf);
    }
}

fn state_file_path() -> Option<PathBuf> {
    paths::get_app_data_dir().map(|mut p| {
        p.push(STATE_FILE);
        p
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("state.toml");

        let mut state = AppState::default();
        state.last_save_directory = Some(PathBuf::from("/home/user/Pictures"));

        state.save_to_path(&path).expect("save should succeed");
        let (loaded, warning) = AppState::load_from_path(&path);

        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("state.toml");

        let (state, warning) = AppState::load_from_path(&path);
        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn malformed_file_yields_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("state.toml");
        fs::write(&path, "not = [valid").expect("write should succeed");

        let (state, warning) = AppState::load_from_path(&path);
        assert_eq!(state, AppState::default());
        assert_eq!(warning, Some(STATE_WARNING_KEY));
    }

    #[test]
    fn last_save_directory_uses_file_parent() {
        let mut state = AppState::default();
        state.set_last_save_directory_from_file(Path::new("/tmp/walls/sunset.png"));
        assert_eq!(state.last_save_directory, Some(PathBuf::from("/tmp/walls")));
    }
}
