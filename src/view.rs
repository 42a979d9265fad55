//! Visible data ranges and the persisted view rectangle.

/// Numeric range with inclusive bounds.
///
/// A freshly created range carries the unset sentinel (`min = +inf`,
/// `max = -inf`) so that any finite value expands it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a range from explicit bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The unset sentinel range.
    pub fn unset() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Grow both ends by a fraction of the span, or by a unit margin when the
    /// span is zero. Guarantees positive span for any finite input range.
    pub fn with_fit_margin(&self, frac: f64) -> Self {
        let span = self.span();
        let margin = if span > 0.0 { span * frac } else { 1.0 };
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Shift both bounds by a delta.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// The persisted visible rectangle in data space (the range tracker).
///
/// Starts unset; auto-fit fills it from data, pan and zoom mutate it, and a
/// view reset returns it to unset. Both axes are set or unset together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl ViewRect {
    /// Rectangle drawn when no data exists at all.
    pub const FALLBACK: Self = Self {
        x: Range {
            min: -1.0,
            max: 1.0,
        },
        y: Range {
            min: -1.0,
            max: 1.0,
        },
    };

    /// Create a rectangle from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// The unset sentinel rectangle.
    pub fn unset() -> Self {
        Self {
            x: Range::unset(),
            y: Range::unset(),
        }
    }

    /// Check whether the rectangle is still at the unset sentinel.
    pub fn is_unset(&self) -> bool {
        !self.x.is_finite()
    }

    /// Check whether both axes have finite bounds and positive span.
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }

    /// Apply the auto-fit margin to both axes.
    pub fn with_fit_margin(&self, frac: f64) -> Self {
        Self {
            x: self.x.with_fit_margin(frac),
            y: self.y.with_fit_margin(frac),
        }
    }

    /// Shift the rectangle by a data-space delta.
    pub fn shifted(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x.shifted(dx),
            y: self.y.shifted(dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unset_range_expands_from_any_value() {
        let mut range = Range::unset();
        assert!(!range.is_finite());
        range.expand_to_include(-3.0);
        range.expand_to_include(7.0);
        assert_eq!(range, Range::new(-3.0, 7.0));
    }

    #[test]
    fn expand_ignores_non_finite_values() {
        let mut range = Range::new(0.0, 1.0);
        range.expand_to_include(f64::NAN);
        range.expand_to_include(f64::INFINITY);
        assert_eq!(range, Range::new(0.0, 1.0));
    }

    #[test]
    fn fit_margin_is_tenth_of_span() {
        let fitted = Range::new(0.0, 10.0).with_fit_margin(0.1);
        assert_relative_eq!(fitted.min, -1.0);
        assert_relative_eq!(fitted.max, 11.0);
    }

    #[test]
    fn fit_margin_falls_back_to_unit_for_zero_span() {
        let fitted = Range::new(4.0, 4.0).with_fit_margin(0.1);
        assert_relative_eq!(fitted.min, 3.0);
        assert_relative_eq!(fitted.max, 5.0);
        assert!(fitted.is_valid());
    }

    #[test]
    fn view_rect_unset_is_not_valid() {
        let rect = ViewRect::unset();
        assert!(rect.is_unset());
        assert!(!rect.is_valid());
        assert!(ViewRect::FALLBACK.is_valid());
    }

    #[test]
    fn shift_moves_both_bounds() {
        let rect = ViewRect::new(Range::new(0.0, 1.0), Range::new(-1.0, 1.0));
        let shifted = rect.shifted(2.0, -0.5);
        assert_eq!(shifted.x, Range::new(2.0, 3.0));
        assert_eq!(shifted.y, Range::new(-1.5, 0.5));
    }
}
