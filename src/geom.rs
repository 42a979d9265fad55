//! Geometric primitives used by the plotting pipeline.
//!
//! `Point` lives in data space, `PixelPoint` in screen space. Screen Y grows
//! downward, data Y grows upward; converting between the two is the job of
//! [`crate::transform::Transform`].

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen space (integer pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    /// X value in screen pixels.
    pub x: i32,
    /// Y value in screen pixels.
    pub y: i32,
}

impl PixelPoint {
    /// Create a new pixel point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
