// SPDX-License-Identifier: MPL-2.0
//! Pure mapping from a device kind to its preview geometry.
//!
//! [`resolve`] is total and referentially stable: the same [`DeviceKind`]
//! always yields the same [`GeometryDescriptor`], and the descriptor is plain
//! data that callers recompute on every render instead of caching.
//!
//! The per-device measurements are fixed visual constants inherited from the
//! product design; they are placement, not behavior, and are not re-derived.

use super::device::DeviceKind;
use iced::{Color, Size, Vector};

/// Fixed card size shared by every device variant.
pub const FRAME_SIZE: Size = Size::new(288.0, 600.0);

/// How far the side-button marks protrude from the frame edge.
pub const BUTTON_DEPTH: f32 = 4.0;

/// Home-indicator pill dimensions (iPhone only).
pub const HOME_INDICATOR_SIZE: Size = Size::new(96.0, 4.0);

/// Gap between the home-indicator pill and the bottom frame edge.
pub const HOME_INDICATOR_BOTTOM_GAP: f32 = 10.0;

/// Four-sided inset from the frame edge to the screen area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenInset {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl ScreenInset {
    const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Size and placement of the notch cutout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchGeometry {
    pub size: Size,
    /// Distance from the top frame edge to the top of the notch.
    pub top_offset: f32,
}

/// Which frame edge a side button sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSide {
    Left,
    Right,
}

/// One side-button mark: edge, vertical offset from the frame top, length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSpec {
    pub side: ButtonSide,
    pub offset_y: f32,
    pub length: f32,
}

/// Drop shadow cast by the frame card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameShadow {
    pub color: Color,
    pub offset: Vector,
    pub blur_radius: f32,
}

/// Resolved visual geometry for one device kind.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryDescriptor {
    pub frame_size: Size,
    pub frame_radius: f32,
    pub border_width: f32,
    pub border_color: Color,
    /// Frame background gradient, top-left stop to bottom-right stop.
    pub gradient: [Color; 2],
    pub shadow: FrameShadow,
    pub screen_inset: ScreenInset,
    pub screen_radius: f32,
    pub notch: Option<NotchGeometry>,
    pub buttons: [ButtonSpec; 3],
    pub has_home_indicator: bool,
}

const SHADOW: FrameShadow = FrameShadow {
    color: Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.45,
    },
    offset: Vector { x: 0.0, y: 8.0 },
    blur_radius: 16.0,
};

// Frame chrome tones: slate for iPhone, near-black for Android, gray for Pixel.
const SLATE_DARK: Color = Color::from_rgb(0.20, 0.25, 0.33);
const SLATE_DEEP: Color = Color::from_rgb(0.06, 0.09, 0.16);
const NEAR_BLACK: Color = Color::from_rgb(0.07, 0.09, 0.15);
const CHARCOAL: Color = Color::from_rgb(0.12, 0.16, 0.22);
const GRAY_EDGE: Color = Color::from_rgb(0.29, 0.33, 0.39);
const GRAY_DEEP: Color = Color::from_rgb(0.07, 0.09, 0.15);

fn iphone() -> GeometryDescriptor {
    GeometryDescriptor {
        frame_size: FRAME_SIZE,
        frame_radius: 36.0,
        border_width: 8.0,
        border_color: SLATE_DARK,
        gradient: [SLATE_DARK, SLATE_DEEP],
        shadow: SHADOW,
        screen_inset: ScreenInset::uniform(12.0),
        screen_radius: 28.0,
        notch: Some(NotchGeometry {
            size: Size::new(120.0, 28.0),
            top_offset: 14.0,
        }),
        buttons: [
            ButtonSpec {
                side: ButtonSide::Right,
                offset_y: 100.0,
                length: 60.0,
            },
            ButtonSpec {
                side: ButtonSide::Left,
                offset_y: 120.0,
                length: 30.0,
            },
            ButtonSpec {
                side: ButtonSide::Left,
                offset_y: 160.0,
                length: 30.0,
            },
        ],
        has_home_indicator: true,
    }
}

fn android() -> GeometryDescriptor {
    GeometryDescriptor {
        frame_size: FRAME_SIZE,
        frame_radius: 24.0,
        border_width: 6.0,
        border_color: NEAR_BLACK,
        gradient: [CHARCOAL, NEAR_BLACK],
        shadow: SHADOW,
        screen_inset: ScreenInset::uniform(10.0),
        screen_radius: 18.0,
        notch: None,
        buttons: [
            ButtonSpec {
                side: ButtonSide::Right,
                offset_y: 80.0,
                length: 40.0,
            },
            ButtonSpec {
                side: ButtonSide::Left,
                offset_y: 100.0,
                length: 30.0,
            },
            ButtonSpec {
                side: ButtonSide::Left,
                offset_y: 140.0,
                length: 30.0,
            },
        ],
        has_home_indicator: false,
    }
}

fn pixel() -> GeometryDescriptor {
    GeometryDescriptor {
        frame_size: FRAME_SIZE,
        frame_radius: 32.0,
        border_width: 7.0,
        border_color: GRAY_EDGE,
        gradient: [GRAY_EDGE, GRAY_DEEP],
        shadow: SHADOW,
        screen_inset: ScreenInset::uniform(11.0),
        screen_radius: 25.0,
        notch: Some(NotchGeometry {
            size: Size::new(80.0, 20.0),
            top_offset: 14.0,
        }),
        buttons: [
            ButtonSpec {
                side: ButtonSide::Right,
                offset_y: 100.0,
                length: 60.0,
            },
            ButtonSpec {
                side: ButtonSide::Left,
                offset_y: 120.0,
                length: 30.0,
            },
            ButtonSpec {
                side: ButtonSide::Left,
                offset_y: 160.0,
                length: 30.0,
            },
        ],
        has_home_indicator: false,
    }
}

/// Resolves the geometry for a device kind.
///
/// Exhaustive over the closed enum; the fallback arm shares the iPhone
/// geometry so unrecognized selections still render a complete frame.
#[must_use]
pub fn resolve(device: DeviceKind) -> GeometryDescriptor {
    match device {
        DeviceKind::Iphone | DeviceKind::Default => iphone(),
        DeviceKind::Android => android(),
        DeviceKind::Pixel => pixel(),
    }
}
