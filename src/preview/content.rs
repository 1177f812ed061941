// SPDX-License-Identifier: MPL-2.0
//! What the preview screen currently shows.

/// Tri-state content tag for the preview screen.
///
/// A proper sum type on purpose: exactly one variant is active at render
/// time, which rules out impossible combinations like "loading and showing
/// an image" by construction. The renderer does not own this state; the
/// studio derives it fresh for every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentState {
    /// A generation request is in flight.
    Loading,
    /// A generated wallpaper is shown; the URL identifies the resource.
    Image(String),
    /// Nothing generated yet.
    Empty,
}

impl ContentState {
    /// Returns the image URL when a wallpaper is shown.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self {
            ContentState::Image(url) => Some(url),
            ContentState::Loading | ContentState::Empty => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_is_only_present_for_image_variant() {
        assert_eq!(ContentState::Loading.image_url(), None);
        assert_eq!(ContentState::Empty.image_url(), None);
        assert_eq!(
            ContentState::Image("https://x/y.webp".into()).image_url(),
            Some("https://x/y.webp")
        );
    }

    #[test]
    fn loading_flag_matches_variant() {
        assert!(ContentState::Loading.is_loading());
        assert!(!ContentState::Empty.is_loading());
        assert!(!ContentState::Image(String::new()).is_loading());
    }
}
