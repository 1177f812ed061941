// SPDX-License-Identifier: MPL-2.0
//! Phone-frame preview: device geometry resolution and scene rendering.
//!
//! The module is split the way the data flows:
//! - [`device`] defines the closed set of device kinds and the total parser.
//! - [`geometry`] maps a device kind to its visual geometry descriptor.
//! - [`content`] models what the preview screen currently shows.
//! - [`scene`] composes geometry and content into a comparable node tree.
//! - [`phone_frame`] paints a composed scene with the Iced canvas.

pub mod content;
pub mod device;
pub mod geometry;
pub mod phone_frame;
pub mod scene;

pub use content::ContentState;
pub use device::DeviceKind;
pub use geometry::{resolve, GeometryDescriptor};
pub use phone_frame::PhoneFrame;
pub use scene::{compose, PreviewScene};
