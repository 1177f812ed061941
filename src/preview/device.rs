// SPDX-License-Identifier: MPL-2.0
//! The closed set of device kinds the preview can imitate.

use std::fmt;

/// Device selection for the phone-frame preview.
///
/// `Default` is the fallback kind used when an input label is not recognized;
/// its geometry is identical to `Iphone`'s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceKind {
    #[default]
    Iphone,
    Android,
    Pixel,
    Default,
}

impl DeviceKind {
    /// Device kinds offered for selection in the studio form.
    ///
    /// `Default` is excluded: it only exists as a parse fallback.
    pub const ALL: [DeviceKind; 3] = [DeviceKind::Iphone, DeviceKind::Android, DeviceKind::Pixel];

    /// Stable lowercase label used in config files and persisted state.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DeviceKind::Iphone => "iphone",
            DeviceKind::Android => "android",
            DeviceKind::Pixel => "pixel",
            DeviceKind::Default => "default",
        }
    }

    /// Parses a device label. Total over all inputs: anything that is not a
    /// known label maps to [`DeviceKind::Default`] rather than an error.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "iphone" => DeviceKind::Iphone,
            "android" => DeviceKind::Android,
            "pixel" => DeviceKind::Pixel,
            _ => DeviceKind::Default,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceKind::Iphone | DeviceKind::Default => "iPhone",
            DeviceKind::Android => "Android",
            DeviceKind::Pixel => "Pixel",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_for_selectable_kinds() {
        for kind in DeviceKind::ALL {
            assert_eq!(DeviceKind::from_label(kind.label()), kind);
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_default() {
        assert_eq!(DeviceKind::from_label("galaxy"), DeviceKind::Default);
        assert_eq!(DeviceKind::from_label(""), DeviceKind::Default);
        assert_eq!(DeviceKind::from_label("   "), DeviceKind::Default);
    }

    #[test]
    fn parsing_is_case_and_whitespace_insensitive() {
        assert_eq!(DeviceKind::from_label(" iPhone "), DeviceKind::Iphone);
        assert_eq!(DeviceKind::from_label("PIXEL"), DeviceKind::Pixel);
    }

    #[test]
    fn selectable_kinds_exclude_fallback() {
        assert!(!DeviceKind::ALL.contains(&DeviceKind::Default));
    }
}
