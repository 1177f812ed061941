// SPDX-License-Identifier: MPL-2.0
//! Canvas widget that paints a composed [`PreviewScene`].
//!
//! Layout lives in [`super::scene`]; this file only turns scene nodes into
//! canvas paths. The wallpaper bitmap is clipped to the screen region and
//! the bezel ring is painted over it, so image corners never leak past the
//! rounded screen area.

use super::scene::{PillNode, PreviewScene};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::image::Handle;
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Margin around the frame card, leaving room for side buttons and shadow.
pub const CANVAS_MARGIN: f32 = 16.0;

/// Screen fill behind the wallpaper (and under the loading/empty overlays).
const SCREEN_BACKDROP: Color = Color::from_rgb(0.04, 0.05, 0.09);

/// Notch fill, darker than any frame tone.
const NOTCH_FILL: Color = Color::from_rgb(0.03, 0.04, 0.08);

/// Home-indicator pill fill.
const HOME_INDICATOR_FILL: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.8,
};

/// Paints a phone-frame preview scene.
pub struct PhoneFrame {
    scene: PreviewScene,
    wallpaper: Option<Handle>,
    wallpaper_size: Option<Size>,
    cache: Cache,
}

impl PhoneFrame {
    /// Creates a painter for the given scene without a wallpaper bitmap.
    #[must_use]
    pub fn new(scene: PreviewScene) -> Self {
        Self {
            scene,
            wallpaper: None,
            wallpaper_size: None,
            cache: Cache::default(),
        }
    }

    /// Attaches the fetched wallpaper bitmap and its pixel dimensions.
    #[must_use]
    pub fn with_wallpaper(mut self, handle: Handle, width: u32, height: u32) -> Self {
        self.wallpaper = Some(handle);
        self.wallpaper_size = Some(Size::new(width as f32, height as f32));
        self
    }

    /// Total widget size: the frame card plus the surrounding margin.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        let frame = self.scene.frame.bounds.size();
        Size::new(
            frame.width + 2.0 * CANVAS_MARGIN,
            frame.height + 2.0 * CANVAS_MARGIN,
        )
    }

    /// Wraps the painter in a fixed-size canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.canvas_size();
        Canvas::new(self)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .into()
    }

    fn draw_scene(&self, frame: &mut Frame) {
        let card = &self.scene.frame;
        let screen = &self.scene.screen;

        // Scene nodes are frame-local; shift them into the canvas, which adds
        // a margin for the side buttons and the shadow.
        let card_bounds = shifted(card.bounds);
        let screen_bounds = shifted(screen.bounds);

        // Drop shadow behind the card.
        let shadow = card.shadow;
        let shadow_path = Path::rounded_rectangle(
            Point::new(
                card_bounds.x + shadow.offset.x,
                card_bounds.y + shadow.offset.y,
            ),
            card_bounds.size(),
            card.radius.into(),
        );
        frame.fill(&shadow_path, shadow.color);

        // Screen backdrop, visible until a wallpaper covers it.
        let screen_path = Path::rounded_rectangle(
            screen_bounds.position(),
            screen_bounds.size(),
            screen.radius.into(),
        );
        frame.fill(&screen_path, SCREEN_BACKDROP);

        if let (Some(handle), Some(image_size)) = (&self.wallpaper, self.wallpaper_size) {
            frame.with_clip(screen_bounds, |frame| {
                let local = Rectangle::new(Point::ORIGIN, screen_bounds.size());
                let cover = cover_bounds(local, image_size);
                frame.draw_image(cover, canvas::Image::new(handle.clone()));
            });
        }

        // Bezel ring between the screen and the outer edge. The even-odd rule
        // also masks the wallpaper's square corners inside the rounded screen.
        let bezel = Path::new(|builder| {
            builder.rounded_rectangle(
                card_bounds.position(),
                card_bounds.size(),
                card.radius.into(),
            );
            builder.rounded_rectangle(
                screen_bounds.position(),
                screen_bounds.size(),
                screen.radius.into(),
            );
        });
        let gradient = canvas::gradient::Linear::new(
            card_bounds.position(),
            Point::new(
                card_bounds.x + card_bounds.width,
                card_bounds.y + card_bounds.height,
            ),
        )
        .add_stop(0.0, card.gradient[0])
        .add_stop(1.0, card.gradient[1]);
        frame.fill(
            &bezel,
            canvas::Fill {
                style: canvas::Style::Gradient(canvas::Gradient::Linear(gradient)),
                rule: canvas::fill::Rule::EvenOdd,
            },
        );

        // Outer border stroke.
        let outline = Path::rounded_rectangle(
            card_bounds.position(),
            card_bounds.size(),
            card.radius.into(),
        );
        frame.stroke(
            &outline,
            Stroke::default()
                .with_width(card.border_width)
                .with_color(card.border_color),
        );

        if let Some(notch) = &self.scene.notch {
            fill_pill(frame, notch, NOTCH_FILL);
        }

        if let Some(indicator) = &self.scene.home_indicator {
            fill_pill(frame, indicator, HOME_INDICATOR_FILL);
        }

        for button in &self.scene.buttons {
            fill_pill(frame, button, card.border_color);
        }
    }
}

/// Shifts a frame-local rectangle into canvas coordinates.
fn shifted(bounds: Rectangle) -> Rectangle {
    Rectangle::new(
        Point::new(bounds.x + CANVAS_MARGIN, bounds.y + CANVAS_MARGIN),
        bounds.size(),
    )
}

impl<Message> canvas::Program<Message> for PhoneFrame {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                self.draw_scene(frame);
            });

        vec![geometry]
    }
}

fn fill_pill(frame: &mut Frame, pill: &PillNode, color: Color) {
    let bounds = shifted(pill.bounds);
    let path = Path::rounded_rectangle(bounds.position(), bounds.size(), pill.radius.into());
    frame.fill(&path, color);
}

/// Bounds that scale an image to cover `area` while preserving aspect ratio.
///
/// The returned rectangle is centered on the area and at least as large as it
/// on both axes; the caller clips the overflow.
#[must_use]
pub fn cover_bounds(area: Rectangle, image: Size) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return area;
    }

    let scale = (area.width / image.width).max(area.height / image.height);
    let scaled = Size::new(image.width * scale, image.height * scale);

    Rectangle::new(
        Point::new(
            area.x - (scaled.width - area.width) / 2.0,
            area.y - (scaled.height - area.height) / 2.0,
        ),
        scaled,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{compose, ContentState, DeviceKind};

    fn screen_area() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(264.0, 576.0))
    }

    #[test]
    fn cover_bounds_fills_both_axes() {
        let area = screen_area();
        for image in [
            Size::new(512.0, 910.0),
            Size::new(910.0, 512.0),
            Size::new(512.0, 512.0),
        ] {
            let cover = cover_bounds(area, image);
            assert!(cover.width >= area.width);
            assert!(cover.height >= area.height);
        }
    }

    #[test]
    fn cover_bounds_is_centered() {
        let area = screen_area();
        let cover = cover_bounds(area, Size::new(910.0, 512.0));
        let left_overflow = area.x - cover.x;
        let right_overflow = (cover.x + cover.width) - (area.x + area.width);
        assert!((left_overflow - right_overflow).abs() < 0.001);
    }

    #[test]
    fn cover_bounds_preserves_aspect_ratio() {
        let area = screen_area();
        let image = Size::new(512.0, 910.0);
        let cover = cover_bounds(area, image);
        let original = image.width / image.height;
        let covered = cover.width / cover.height;
        assert!((original - covered).abs() < 0.001);
    }

    #[test]
    fn cover_bounds_tolerates_degenerate_image_sizes() {
        let area = screen_area();
        assert_eq!(cover_bounds(area, Size::new(0.0, 512.0)), area);
        assert_eq!(cover_bounds(area, Size::new(512.0, 0.0)), area);
    }

    #[test]
    fn canvas_size_adds_margin_around_the_frame() {
        let painter = PhoneFrame::new(compose(DeviceKind::Iphone, ContentState::Empty));
        let size = painter.canvas_size();
        assert_eq!(size.width, 288.0 + 2.0 * CANVAS_MARGIN);
        assert_eq!(size.height, 600.0 + 2.0 * CANVAS_MARGIN);
    }
}
