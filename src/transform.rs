//! Coordinate transforms between data and screen space.

use crate::geom::{PixelPoint, Point};
use crate::view::ViewRect;

/// Affine map between a data rectangle and a pixel surface.
///
/// Rebuilt from scratch every time the rectangle or the surface size changes;
/// never mutated in place. Screen Y is flipped: data `min_y` lands on the
/// bottom pixel row, data `max_y` on the top one.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    min_x: f64,
    min_y: f64,
    x_span: f64,
    y_span: f64,
    x_to_screen: f64,
    y_to_screen: f64,
    x_from_screen: f64,
    y_from_screen: f64,
    height: i32,
}

impl Transform {
    /// Create a transform for the given rectangle and surface size.
    ///
    /// Returns `None` for a degenerate rectangle (non-finite bounds or zero
    /// span) or a surface smaller than 2x2 pixels.
    pub fn new(rect: ViewRect, width: i32, height: i32) -> Option<Self> {
        if width < 2 || height < 2 || !rect.is_valid() {
            return None;
        }
        let x_span = rect.x.span();
        let y_span = rect.y.span();
        let x_to_screen = f64::from(width - 1) / x_span;
        let y_to_screen = f64::from(height - 1) / y_span;
        Some(Self {
            min_x: rect.x.min,
            min_y: rect.y.min,
            x_span,
            y_span,
            x_to_screen,
            y_to_screen,
            x_from_screen: x_to_screen.recip(),
            y_from_screen: y_to_screen.recip(),
            height,
        })
    }

    /// Visible X span in data units.
    pub fn x_span(&self) -> f64 {
        self.x_span
    }

    /// Visible Y span in data units.
    pub fn y_span(&self) -> f64 {
        self.y_span
    }

    /// Data units covered by one horizontal pixel.
    pub fn x_per_pixel(&self) -> f64 {
        self.x_from_screen
    }

    /// Data units covered by one vertical pixel.
    pub fn y_per_pixel(&self) -> f64 {
        self.y_from_screen
    }

    /// Map a data point into screen space.
    ///
    /// Rounding is half-away-from-zero so pixel placement is symmetric for
    /// negative coordinates.
    pub fn to_screen(&self, point: Point) -> PixelPoint {
        let sx = ((point.x - self.min_x) * self.x_to_screen).round();
        let sy = ((point.y - self.min_y) * self.y_to_screen).round();
        PixelPoint::new(sx as i32, self.height - 1 - sy as i32)
    }

    /// Map a screen point back into data space.
    pub fn from_screen(&self, point: PixelPoint) -> Point {
        let x = self.min_x + f64::from(point.x) * self.x_from_screen;
        let y = self.min_y + f64::from(self.height - 1 - point.y) * self.y_from_screen;
        Point::new(x, y)
    }
}
