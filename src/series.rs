//! Per-frame series storage and the chained builder API.

use num_traits::AsPrimitive;
use thiserror::Error;

use crate::geom::Point;
use crate::render::Color;

/// Validation errors for caller-supplied series data.
///
/// These are recoverable: the session either aborts the frame or skips the
/// offending series, depending on [`crate::plot::MalformedPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// Interleaved xy data must pair up.
    #[error("series {index}: interleaved xy data has odd length {len}")]
    OddInterleaved {
        /// Position of the series within the frame.
        index: usize,
        /// Length of the offending slice.
        len: usize,
    },
    /// X and y must end up the same length.
    #[error("series {index}: {x_len} x values but {y_len} y values")]
    LengthMismatch {
        /// Position of the series within the frame.
        index: usize,
        /// Number of x values.
        x_len: usize,
        /// Number of y values.
        y_len: usize,
    },
}

/// A finalized series: equal-length x/y values and a display color.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
    color: Color,
}

impl Series {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// X values.
    pub fn xs(&self) -> &[f64] {
        &self.x
    }

    /// Y values.
    pub fn ys(&self) -> &[f64] {
        &self.y
    }

    /// Display color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Iterate the points in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| Point::new(x, y))
    }
}

/// Chained builder for one series within a frame.
///
/// Created through [`crate::plot::Frame::series`]; every setter returns the
/// builder again. Values come from any slice of primitive numbers and are
/// converted to `f64`. An odd-length `xy` call is recorded as a defect and
/// surfaced when the frame finalizes the series.
#[derive(Debug)]
pub struct SeriesBuilder {
    x: Vec<f64>,
    y: Vec<f64>,
    color: Color,
    odd_xy_len: Option<usize>,
}

impl SeriesBuilder {
    pub(crate) fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            color: Color::WHITE,
            odd_xy_len: None,
        }
    }

    /// Set the x values.
    pub fn x<T>(&mut self, values: &[T]) -> &mut Self
    where
        T: AsPrimitive<f64>,
    {
        self.x = to_f64(values);
        self
    }

    /// Set the y values.
    ///
    /// If no x values are set, they are synthesized as `0, 1, 2, ...` when
    /// the series finalizes.
    pub fn y<T>(&mut self, values: &[T]) -> &mut Self
    where
        T: AsPrimitive<f64>,
    {
        self.y = to_f64(values);
        self
    }

    /// Set interleaved `x0, y0, x1, y1, ...` values.
    pub fn xy<T>(&mut self, values: &[T]) -> &mut Self
    where
        T: AsPrimitive<f64>,
    {
        if values.len() % 2 != 0 {
            self.odd_xy_len = Some(values.len());
            return self;
        }
        let values = to_f64(values);
        self.x = values.iter().copied().step_by(2).collect();
        self.y = values.iter().copied().skip(1).step_by(2).collect();
        self
    }

    /// Set the display color from 0-255 channel bytes.
    pub fn rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
        self.color = Color::from_rgb8(red, green, blue);
        self
    }

    /// Set the display color directly.
    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    /// Validate and freeze the builder into a series.
    pub(crate) fn finish(self, index: usize) -> Result<Series, SeriesError> {
        if let Some(len) = self.odd_xy_len {
            return Err(SeriesError::OddInterleaved { index, len });
        }
        let mut x = self.x;
        if x.is_empty() {
            x = (0..self.y.len()).map(|i| i as f64).collect();
        }
        if x.len() != self.y.len() {
            return Err(SeriesError::LengthMismatch {
                index,
                x_len: x.len(),
                y_len: self.y.len(),
            });
        }
        Ok(Series {
            x,
            y: self.y,
            color: self.color,
        })
    }
}

fn to_f64<T>(values: &[T]) -> Vec<f64>
where
    T: AsPrimitive<f64>,
{
    values.iter().map(|value| value.as_()).collect()
}
