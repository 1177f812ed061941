// SPDX-License-Identifier: MPL-2.0
//! Pure composition of device geometry and screen content into a scene.
//!
//! [`compose`] resolves the geometry for the requested device on every call
//! and lays out each visual part in frame-local coordinates. The resulting
//! [`PreviewScene`] is plain comparable data, so identical inputs produce
//! identical scenes and the painting layer stays free of layout decisions.

use super::content::ContentState;
use super::device::DeviceKind;
use super::geometry::{
    self, ButtonSide, FrameShadow, GeometryDescriptor, BUTTON_DEPTH, HOME_INDICATOR_BOTTOM_GAP,
    HOME_INDICATOR_SIZE,
};
use iced::{Color, Point, Rectangle, Size};

/// A rounded rectangle node (notch, home indicator, side button).
#[derive(Debug, Clone, PartialEq)]
pub struct PillNode {
    pub bounds: Rectangle,
    pub radius: f32,
}

/// The outer frame card.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameNode {
    pub bounds: Rectangle,
    pub radius: f32,
    pub border_width: f32,
    pub border_color: Color,
    pub gradient: [Color; 2],
    pub shadow: FrameShadow,
}

/// The screen region and what it displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenNode {
    pub bounds: Rectangle,
    pub radius: f32,
    pub content: ContentState,
}

/// Composed preview scene in frame-local coordinates.
///
/// The origin is the top-left corner of the frame card; side buttons extend
/// slightly outside the frame into negative `x` or past the frame width.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewScene {
    pub device: DeviceKind,
    pub frame: FrameNode,
    pub screen: ScreenNode,
    pub notch: Option<PillNode>,
    pub home_indicator: Option<PillNode>,
    pub buttons: Vec<PillNode>,
}

/// Composes the preview scene for a device kind and content state.
///
/// Geometry is re-resolved on every call; nothing is cached between renders.
#[must_use]
pub fn compose(device: DeviceKind, content: ContentState) -> PreviewScene {
    let geometry = geometry::resolve(device);

    let frame = FrameNode {
        bounds: Rectangle::new(Point::ORIGIN, geometry.frame_size),
        radius: geometry.frame_radius,
        border_width: geometry.border_width,
        border_color: geometry.border_color,
        gradient: geometry.gradient,
        shadow: geometry.shadow,
    };

    let screen = ScreenNode {
        bounds: screen_bounds(&geometry),
        radius: geometry.screen_radius,
        content,
    };

    let notch = geometry.notch.map(|notch| PillNode {
        bounds: Rectangle::new(
            Point::new(
                (geometry.frame_size.width - notch.size.width) / 2.0,
                notch.top_offset,
            ),
            notch.size,
        ),
        radius: notch.size.height / 2.0,
    });

    let home_indicator = geometry.has_home_indicator.then(|| PillNode {
        bounds: Rectangle::new(
            Point::new(
                (geometry.frame_size.width - HOME_INDICATOR_SIZE.width) / 2.0,
                geometry.frame_size.height
                    - HOME_INDICATOR_BOTTOM_GAP
                    - HOME_INDICATOR_SIZE.height,
            ),
            HOME_INDICATOR_SIZE,
        ),
        radius: HOME_INDICATOR_SIZE.height / 2.0,
    });

    let buttons = geometry
        .buttons
        .iter()
        .map(|button| {
            let x = match button.side {
                ButtonSide::Left => -BUTTON_DEPTH,
                ButtonSide::Right => geometry.frame_size.width,
            };
            PillNode {
                bounds: Rectangle::new(
                    Point::new(x, button.offset_y),
                    Size::new(BUTTON_DEPTH, button.length),
                ),
                radius: BUTTON_DEPTH / 2.0,
            }
        })
        .collect();

    PreviewScene {
        device,
        frame,
        screen,
        notch,
        home_indicator,
        buttons,
    }
}

fn screen_bounds(geometry: &GeometryDescriptor) -> Rectangle {
    let inset = geometry.screen_inset;
    Rectangle::new(
        Point::new(inset.left, inset.top),
        Size::new(
            geometry.frame_size.width - inset.left - inset.right,
            geometry.frame_size.height - inset.top - inset.bottom,
        ),
    )
}
