//! Tick planning: nice step sizes and label precision for an axis span.

use crate::view::Range;

const MANTISSAS: [f64; 3] = [1.0, 2.0, 5.0];

/// Position on the 1-2-5 ladder of nice step sizes.
#[derive(Debug, Clone, Copy)]
struct Ladder {
    index: usize,
    scale: f64,
}

impl Ladder {
    fn step(self) -> f64 {
        MANTISSAS[self.index] * self.scale
    }

    fn up(&mut self) {
        if self.index == 2 {
            self.index = 0;
            self.scale *= 10.0;
        } else {
            self.index += 1;
        }
    }

    fn down(&mut self) {
        if self.index == 0 {
            self.index = 2;
            self.scale /= 10.0;
        } else {
            self.index -= 1;
        }
    }
}

/// Tick step and label precision for one axis, derived from its visible span.
///
/// Recomputed every frame; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlan {
    /// Distance between adjacent ticks, a 1, 2 or 5 times a power of ten.
    pub step: f64,
    /// Digits after the decimal point needed to tell adjacent labels apart.
    pub precision: usize,
}

impl TickPlan {
    /// Plan ticks for a span, targeting between 5 and 15 ticks.
    ///
    /// The precision only grows while scaling sub-unit spans up, never
    /// shrinks, so large spans always get precision 0.
    pub fn for_span(span: f64) -> Self {
        if !span.is_finite() || span <= 0.0 {
            return Self {
                step: 1.0,
                precision: 0,
            };
        }

        let mut steps = span / 10.0;
        let mut scale = 1.0_f64;
        let mut precision = 0_usize;
        if steps < 1.0 {
            while steps < 1.0 {
                steps *= 10.0;
                scale /= 10.0;
                precision += 1;
            }
        } else {
            while steps > 1.0 {
                steps /= 10.0;
                scale *= 10.0;
            }
        }

        // Refine along the 1-2-5 ladder: climb until no more than 15 ticks
        // fit, then descend while the next finer step still fits.
        let mut ladder = Ladder { index: 0, scale };
        while span / ladder.step() > 15.0 {
            ladder.up();
        }
        loop {
            let mut finer = ladder;
            finer.down();
            if span / finer.step() > 15.0 {
                break;
            }
            ladder = finer;
        }

        Self {
            step: ladder.step(),
            precision,
        }
    }

    /// Iterate tick positions covering a range.
    ///
    /// Starts one step below the rounded minimum and walks upward while at or
    /// below the maximum. Ticks within a tenth of a step of zero are skipped
    /// because they would sit on the axis line.
    pub fn ticks(&self, range: Range) -> Ticks {
        Ticks {
            next: (range.min / self.step).round() * self.step - self.step,
            max: range.max,
            step: self.step,
        }
    }

    /// Format a tick label with the planned precision.
    pub fn label(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }
}

/// Iterator over tick positions, see [`TickPlan::ticks`].
#[derive(Debug, Clone)]
pub struct Ticks {
    next: f64,
    max: f64,
    step: f64,
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        loop {
            let value = self.next;
            if value > self.max {
                return None;
            }
            self.next = value + self.step;
            if value.abs() > self.step / 10.0 {
                return Some(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_spans_get_ten_ticks() {
        for span in [0.001, 1.0, 100.0, 100_000.0] {
            let plan = TickPlan::for_span(span);
            assert_relative_eq!(span / plan.step, 10.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn span_fifty_steps_by_five() {
        let plan = TickPlan::for_span(50.0);
        assert_relative_eq!(plan.step, 5.0);
        assert_eq!(plan.precision, 0);
    }

    #[test]
    fn span_seven_stays_in_band() {
        let plan = TickPlan::for_span(7.0);
        assert_relative_eq!(plan.step, 0.5, max_relative = 1e-9);
        assert_eq!(plan.precision, 1);
        let ratio = 7.0 / plan.step;
        assert!((5.0..=15.0).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn tick_count_band_over_mixed_spans() {
        for span in [
            0.003, 0.07, 0.5, 2.0, 7.0, 12.0, 15.0, 16.0, 30.0, 99.0, 150.0, 123_456.0,
        ] {
            let plan = TickPlan::for_span(span);
            let ratio = span / plan.step;
            assert!(
                (5.0..=15.0 + 1e-9).contains(&ratio),
                "span {span} gave step {} (ratio {ratio})",
                plan.step
            );
        }
    }

    #[test]
    fn precision_grows_with_sub_unit_spans() {
        assert_eq!(TickPlan::for_span(0.05).precision, 3);
        assert_eq!(TickPlan::for_span(0.5).precision, 2);
        assert_eq!(TickPlan::for_span(1.0).precision, 1);
        assert_eq!(TickPlan::for_span(10.0).precision, 0);
        assert_eq!(TickPlan::for_span(1_000_000.0).precision, 0);
    }

    #[test]
    fn ticks_cover_range_and_skip_zero() {
        let plan = TickPlan {
            step: 1.0,
            precision: 0,
        };
        let ticks: Vec<f64> = plan.ticks(Range::new(-2.5, 2.5)).collect();
        assert_eq!(ticks, vec![-4.0, -3.0, -2.0, -1.0, 1.0, 2.0]);
    }

    #[test]
    fn ticks_suppress_near_zero_values() {
        let plan = TickPlan {
            step: 0.5,
            precision: 1,
        };
        let ticks: Vec<f64> = plan.ticks(Range::new(-0.6, 0.6)).collect();
        assert!(ticks.iter().all(|v| v.abs() > 0.05), "{ticks:?}");
        assert!(ticks.iter().any(|v| (v - 0.5).abs() < 1e-9));
    }

    #[test]
    fn labels_use_planned_precision() {
        let plan = TickPlan {
            step: 0.5,
            precision: 1,
        };
        assert_eq!(plan.label(1.5), "1.5");
        assert_eq!(plan.label(-0.5), "-0.5");
        let coarse = TickPlan {
            step: 10.0,
            precision: 0,
        };
        assert_eq!(coarse.label(40.0), "40");
    }

    #[test]
    fn degenerate_span_falls_back_to_unit_step() {
        assert_eq!(TickPlan::for_span(0.0).step, 1.0);
        assert_eq!(TickPlan::for_span(f64::NAN).step, 1.0);
    }
}
