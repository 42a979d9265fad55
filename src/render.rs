//! Colors and the thin per-frame drawing routines.
//!
//! Everything here is a straight translation of already-computed geometry
//! into [`Surface`] calls; the numeric work lives in the transform and tick
//! planner.

use crate::axis::TickPlan;
use crate::geom::{PixelPoint, Point};
use crate::series::Series;
use crate::surface::Surface;
use crate::transform::Transform;
use crate::view::Range;

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 0-255 channel bytes.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        )
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque gray.
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
}

/// Draw the axis lines through the data-space origin.
pub(crate) fn draw_axes<S: Surface>(
    surface: &mut S,
    transform: &Transform,
    width: i32,
    height: i32,
    color: Color,
) {
    let origin = transform.to_screen(Point::new(0.0, 0.0));
    surface.draw_line(
        PixelPoint::new(0, origin.y),
        PixelPoint::new(width, origin.y),
        color,
    );
    surface.draw_line(
        PixelPoint::new(origin.x, 0),
        PixelPoint::new(origin.x, height),
        color,
    );
}

/// Draw X tick dashes on the horizontal axis with centered labels below.
pub(crate) fn draw_x_ticks<S: Surface>(
    surface: &mut S,
    transform: &Transform,
    range: Range,
    plan: &TickPlan,
    color: Color,
) {
    for x in plan.ticks(range) {
        let at = transform.to_screen(Point::new(x, 0.0));
        surface.draw_line(
            PixelPoint::new(at.x, at.y - 3),
            PixelPoint::new(at.x, at.y + 4),
            color,
        );
        let text = plan.label(x);
        let (text_w, _) = surface.text_size(&text);
        surface.draw_text(&text, PixelPoint::new(at.x - text_w / 2, at.y + 5), color);
    }
}

/// Draw Y tick dashes on the vertical axis with right-aligned labels.
pub(crate) fn draw_y_ticks<S: Surface>(
    surface: &mut S,
    transform: &Transform,
    range: Range,
    plan: &TickPlan,
    color: Color,
) {
    for y in plan.ticks(range) {
        let at = transform.to_screen(Point::new(0.0, y));
        surface.draw_line(
            PixelPoint::new(at.x - 3, at.y),
            PixelPoint::new(at.x + 4, at.y),
            color,
        );
        let text = plan.label(y);
        let (text_w, text_h) = surface.text_size(&text);
        surface.draw_text(
            &text,
            PixelPoint::new(at.x - 5 - text_w, at.y - text_h / 2),
            color,
        );
    }
}

/// Draw one series as a connected polyline.
pub(crate) fn draw_series<S: Surface>(surface: &mut S, transform: &Transform, series: &Series) {
    let mut points = series.points().map(|point| transform.to_screen(point));
    let Some(mut last) = points.next() else {
        return;
    };
    for next in points {
        surface.draw_line(last, next, series.color());
        last = next;
    }
    // the line primitive omits the terminal pixel of its last segment
    surface.draw_point(last, series.color());
}

/// Draw the mouse-position readout in the lower right corner.
///
/// Uses one more decimal digit than the axis labels so small cursor motions
/// stay visible.
pub(crate) fn draw_mouse_readout<S: Surface>(
    surface: &mut S,
    transform: &Transform,
    mouse: PixelPoint,
    width: i32,
    height: i32,
    x_precision: usize,
    y_precision: usize,
    color: Color,
) {
    let at = transform.from_screen(mouse);
    let text = format!(
        "{x:.xp$} {y:.yp$}",
        x = at.x,
        y = at.y,
        xp = x_precision + 1,
        yp = y_precision + 1,
    );
    let (text_w, text_h) = surface.text_size(&text);
    surface.draw_text(
        &text,
        PixelPoint::new(width - text_w, height - text_h),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_maps_to_unit_range() {
        let color = Color::from_rgb8(255, 127, 0);
        assert_eq!(color.r, 1.0);
        assert!((color.g - 127.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);
    }
}
