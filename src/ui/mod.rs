// SPDX-License-Identifier: MPL-2.0
//! UI layer: screens, reusable widgets, styles, and design tokens.

pub mod about;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod studio;
pub mod styles;
pub mod theming;
pub mod widgets;
