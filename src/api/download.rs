// SPDX-License-Identifier: MPL-2.0
//! Saving a fetched wallpaper to disk.
//!
//! The save dialog is seeded with the last-used directory and a timestamped
//! default filename; the raw fetched bytes are written unmodified, so the
//! saved file is exactly what the backend produced.

use crate::error::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Builds the default filename for a saved wallpaper,
/// e.g. `wallpaper-20260807-153012.jpg`.
#[must_use]
pub fn timestamped_filename(now: &DateTime<Local>, extension: &str) -> String {
    format!("wallpaper-{}.{}", now.format("%Y%m%d-%H%M%S"), extension)
}

/// Infers a file extension from an image URL.
///
/// Generation backends often serve extension-less URLs with query strings
/// (crop and format parameters), so this falls back to `jpg`.
#[must_use]
pub fn extension_from_url(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let lower = path.to_ascii_lowercase();

    if lower.ends_with(".png") {
        "png"
    } else if lower.ends_with(".webp") {
        "webp"
    } else {
        "jpg"
    }
}

/// Opens the native save dialog.
///
/// Returns `None` when the user cancels.
pub async fn choose_save_path(
    suggested_dir: Option<PathBuf>,
    filename: String,
) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&filename);

    if let Some(dir) = suggested_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Writes the wallpaper bytes to the chosen path.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamped_filename_uses_compact_format() {
        let now = Local.with_ymd_and_hms(2026, 8, 7, 15, 30, 12).unwrap();
        assert_eq!(
            timestamped_filename(&now, "jpg"),
            "wallpaper-20260807-153012.jpg"
        );
    }

    #[test]
    fn extension_detects_known_suffixes() {
        assert_eq!(extension_from_url("https://x/y.webp"), "webp");
        assert_eq!(extension_from_url("https://x/y.png"), "png");
        assert_eq!(extension_from_url("https://x/y.jpg"), "jpg");
    }

    #[test]
    fn extension_ignores_query_strings() {
        assert_eq!(
            extension_from_url("https://images.example/photo.png?w=512&h=910&fit=crop"),
            "png"
        );
        assert_eq!(
            extension_from_url("https://images.example/photo-1?w=512&auto=format"),
            "jpg"
        );
    }

    #[test]
    fn write_bytes_round_trips() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("wallpaper.jpg");
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];

        write_bytes(&path, &bytes).expect("write should succeed");
        assert_eq!(std::fs::read(&path).expect("read should succeed"), bytes);
    }
}
