// SPDX-License-Identifier: MPL-2.0
//! Custom widgets that need canvas-level drawing.

pub mod animated_spinner;

pub use animated_spinner::AnimatedSpinner;
