// SPDX-License-Identifier: MPL-2.0
//! Top-level screens.

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Prompt form plus phone-frame preview.
    #[default]
    Studio,
    Settings,
    About,
}
