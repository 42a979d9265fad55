//! The plot session and its per-frame pipeline.
//!
//! [`Plot`] owns everything that outlives a frame: the persisted view
//! rectangle, the drag anchor, and the fullscreen flag. Each call to
//! [`Plot::frame`] rebuilds the series store from the caller's closure,
//! applies interaction, and draws through the surface.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::axis::TickPlan;
use crate::geom::PixelPoint;
use crate::interaction;
use crate::render::{self, Color};
use crate::series::{Series, SeriesBuilder, SeriesError};
use crate::surface::{MouseButton, PlotCommand, Surface};
use crate::transform::Transform;
use crate::view::ViewRect;

/// What to do with a series that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Return the error before anything is drawn.
    #[default]
    Abort,
    /// Drop the series with a warning and draw the rest.
    Skip,
}

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Zoom factor applied per wheel step.
    pub zoom_base: f64,
    /// Auto-fit margin as a fraction of the data span.
    pub margin_frac: f64,
    /// Policy for malformed series.
    pub malformed: MalformedPolicy,
    /// Color used for axes, ticks and the mouse readout.
    pub axis_color: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            zoom_base: 1.1,
            margin_frac: 0.1,
            malformed: MalformedPolicy::default(),
            axis_color: Color::WHITE,
        }
    }
}

/// Error returned by [`Plot::frame`].
#[derive(Debug, Error)]
pub enum FrameError {
    /// A series failed validation under [`MalformedPolicy::Abort`].
    #[error(transparent)]
    Malformed(#[from] SeriesError),
}

/// Outcome of a completed frame.
#[derive(Debug)]
pub struct FrameReport {
    /// Number of series drawn.
    pub drawn: usize,
    /// Validation errors of series dropped under [`MalformedPolicy::Skip`].
    pub skipped: Vec<SeriesError>,
    /// The rectangle the frame was drawn against.
    pub view: ViewRect,
}

/// Per-frame series store and deferred callback, handed to the caller's
/// closure by [`Plot::frame`]. Dropped at the end of the frame, so the store
/// is cleared by construction.
pub struct Frame {
    builders: Vec<SeriesBuilder>,
    after_render: Option<Box<dyn FnOnce()>>,
}

impl Frame {
    fn new() -> Self {
        Self {
            builders: Vec::new(),
            after_render: None,
        }
    }

    /// Start a new series and return its builder.
    pub fn series(&mut self) -> &mut SeriesBuilder {
        let index = self.builders.len();
        self.builders.push(SeriesBuilder::new());
        &mut self.builders[index]
    }

    /// Register a callback to run after the frame's drawing completes.
    ///
    /// At most one callback per frame; a second call replaces the first.
    pub fn after_render(&mut self, callback: impl FnOnce() + 'static) {
        self.after_render = Some(Box::new(callback));
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("series", &self.builders.len())
            .field("after_render", &self.after_render.is_some())
            .finish()
    }
}

/// A plotting session.
///
/// Create one, keep it across frames, and drive it from the host's refresh
/// callback:
///
/// ```no_run
/// # use quickplot::{Color, MouseButton, PixelPoint, PlotCommand, Surface};
/// # struct Host;
/// # impl Surface for Host {
/// #     fn size(&self) -> (i32, i32) { (800, 600) }
/// #     fn mouse_position(&self) -> PixelPoint { PixelPoint::new(0, 0) }
/// #     fn is_mouse_down(&self, _: MouseButton) -> bool { false }
/// #     fn wheel_delta(&self) -> f64 { 0.0 }
/// #     fn was_command_pressed(&self, _: PlotCommand) -> bool { false }
/// #     fn set_fullscreen(&mut self, _: bool) {}
/// #     fn draw_line(&mut self, _: PixelPoint, _: PixelPoint, _: Color) {}
/// #     fn draw_point(&mut self, _: PixelPoint, _: Color) {}
/// #     fn draw_text(&mut self, _: &str, _: PixelPoint, _: Color) {}
/// #     fn text_size(&self, _: &str) -> (i32, i32) { (0, 0) }
/// # }
/// let mut plot = quickplot::Plot::new();
/// let mut surface = Host;
/// plot.frame(&mut surface, |frame| {
///     frame.series().y(&[1.0, 4.0, 9.0, 16.0]).rgb(255, 128, 0);
/// }).expect("well-formed series");
/// ```
#[derive(Debug)]
pub struct Plot {
    config: SessionConfig,
    view: ViewRect,
    drag: Option<PixelPoint>,
    fullscreen: bool,
}

impl Plot {
    /// Create a session with default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with custom configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            view: ViewRect::unset(),
            drag: None,
            fullscreen: false,
        }
    }

    /// Access the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The persisted view rectangle. Unset until the first auto-fit.
    pub fn view_rect(&self) -> ViewRect {
        self.view
    }

    /// Whether the session wants fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Clear the view range back to unset; the next frame auto-fits.
    pub fn reset_view(&mut self) {
        debug!("view reset to auto-fit");
        self.view = ViewRect::unset();
        self.drag = None;
    }

    /// Force the fullscreen state.
    ///
    /// Cancels any drag in progress: the anchor pixel is stale once the
    /// surface dimensions change.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
        self.drag = None;
    }

    /// Run one frame: collect series from the caller, update the view from
    /// input, and draw through the surface.
    pub fn frame<S: Surface>(
        &mut self,
        surface: &mut S,
        build: impl FnOnce(&mut Frame),
    ) -> Result<FrameReport, FrameError> {
        if surface.was_command_pressed(PlotCommand::ResetView) {
            self.reset_view();
        }
        if surface.was_command_pressed(PlotCommand::ToggleFullscreen) {
            self.set_fullscreen(!self.fullscreen);
            debug!(fullscreen = self.fullscreen, "fullscreen toggled");
        }
        surface.set_fullscreen(self.fullscreen);

        let mut frame = Frame::new();
        build(&mut frame);
        let Frame {
            builders,
            after_render,
        } = frame;

        let mut series = Vec::with_capacity(builders.len());
        let mut skipped = Vec::new();
        for (index, builder) in builders.into_iter().enumerate() {
            match builder.finish(index) {
                Ok(finished) => series.push(finished),
                Err(err) => match self.config.malformed {
                    MalformedPolicy::Abort => return Err(err.into()),
                    MalformedPolicy::Skip => {
                        warn!(%err, "skipping malformed series");
                        skipped.push(err);
                    }
                },
            }
        }

        let (width, height) = surface.size();
        if width < 2 || height < 2 {
            if let Some(callback) = after_render {
                callback();
            }
            return Ok(FrameReport {
                drawn: 0,
                skipped,
                view: self.view,
            });
        }

        let mouse = surface.mouse_position();

        // The drag begins on press and ends on release even while the view
        // is unset; only its application is gated below.
        if surface.is_mouse_down(MouseButton::Left) {
            if self.drag.is_none() {
                self.drag = Some(mouse);
            }
        } else {
            self.drag = None;
        }

        if self.view.is_unset() {
            self.auto_fit(&series);
        }
        let view_set = !self.view.is_unset();

        let rect = if view_set { self.view } else { ViewRect::FALLBACK };
        let Some(mut transform) = Transform::new(rect, width, height) else {
            // auto-fit and the fallback both guarantee positive spans
            if let Some(callback) = after_render {
                callback();
            }
            return Ok(FrameReport {
                drawn: 0,
                skipped,
                view: rect,
            });
        };

        // Drag the view with the mouse. The anchor moves to the current
        // mouse position each frame so the pan stays incremental.
        if view_set
            && let Some(anchor) = self.drag
            && anchor != mouse
        {
            self.view = interaction::pan_view(self.view, anchor, mouse, &transform);
            self.drag = Some(mouse);
            trace!(
                dx = mouse.x - anchor.x,
                dy = mouse.y - anchor.y,
                "pan applied"
            );
            if let Some(next) = Transform::new(self.view, width, height) {
                transform = next;
            }
        }

        // Zoom with the mouse wheel, anchored at the cursor.
        let wheel = surface.wheel_delta();
        if view_set
            && wheel != 0.0
            && let Some(zoomed) = interaction::zoom_view(
                self.view,
                mouse,
                wheel,
                self.config.zoom_base,
                width,
                height,
            )
        {
            self.view = zoomed;
            trace!(wheel, "zoom applied");
            if let Some(next) = Transform::new(self.view, width, height) {
                transform = next;
            }
        }

        let draw_rect = if view_set { self.view } else { ViewRect::FALLBACK };
        let color = self.config.axis_color;

        render::draw_axes(surface, &transform, width, height, color);

        let x_plan = TickPlan::for_span(transform.x_span());
        let y_plan = TickPlan::for_span(transform.y_span());
        render::draw_x_ticks(surface, &transform, draw_rect.x, &x_plan, color);
        render::draw_y_ticks(surface, &transform, draw_rect.y, &y_plan, color);

        for one in &series {
            render::draw_series(surface, &transform, one);
        }

        render::draw_mouse_readout(
            surface,
            &transform,
            mouse,
            width,
            height,
            x_plan.precision,
            y_plan.precision,
            color,
        );

        if let Some(callback) = after_render {
            callback();
        }

        Ok(FrameReport {
            drawn: series.len(),
            skipped,
            view: draw_rect,
        })
    }

    /// Fill the unset rectangle from the bounds of all series, with margin.
    /// Stays unset when no finite data exists at all.
    fn auto_fit(&mut self, series: &[Series]) {
        let mut fit = ViewRect::unset();
        for one in series {
            for point in one.points() {
                fit.x.expand_to_include(point.x);
                fit.y.expand_to_include(point.y);
            }
        }
        if fit.x.is_finite() && fit.y.is_finite() {
            self.view = fit.with_fit_margin(self.config.margin_frac);
            debug!(
                min_x = self.view.x.min,
                max_x = self.view.x.max,
                min_y = self.view.y.min,
                max_y = self.view.y.max,
                "auto-fit"
            );
        }
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesBuilder;
    use approx::assert_relative_eq;

    fn fit_for(points: &[(f64, f64)]) -> ViewRect {
        let mut plot = Plot::new();
        let mut builder = SeriesBuilder::new();
        let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
        builder.x(&xs).y(&ys);
        let series = vec![builder.finish(0).expect("valid series")];
        plot.auto_fit(&series);
        plot.view_rect()
    }

    #[test]
    fn auto_fit_adds_tenth_margin() {
        let rect = fit_for(&[(0.0, -5.0), (10.0, 5.0)]);
        assert_relative_eq!(rect.x.min, -1.0);
        assert_relative_eq!(rect.x.max, 11.0);
        assert_relative_eq!(rect.y.min, -6.0);
        assert_relative_eq!(rect.y.max, 6.0);
    }

    #[test]
    fn auto_fit_contains_every_point_strictly() {
        let points = [(1.5, 2.5), (-3.0, 0.1), (7.25, -4.0)];
        let rect = fit_for(&points);
        for (x, y) in points {
            assert!(rect.x.min < x && x < rect.x.max);
            assert!(rect.y.min < y && y < rect.y.max);
        }
    }

    #[test]
    fn auto_fit_single_point_uses_unit_margin() {
        let rect = fit_for(&[(2.0, 3.0)]);
        assert_relative_eq!(rect.x.min, 1.0);
        assert_relative_eq!(rect.x.max, 3.0);
        assert_relative_eq!(rect.y.min, 2.0);
        assert_relative_eq!(rect.y.max, 4.0);
    }

    #[test]
    fn auto_fit_without_data_stays_unset() {
        let mut plot = Plot::new();
        plot.auto_fit(&[]);
        assert!(plot.view_rect().is_unset());
    }

    #[test]
    fn reset_view_clears_rectangle_and_drag() {
        let mut plot = Plot::new();
        let mut builder = SeriesBuilder::new();
        builder.y(&[1.0, 2.0]);
        let series = vec![builder.finish(0).expect("valid series")];
        plot.auto_fit(&series);
        assert!(!plot.view_rect().is_unset());
        plot.drag = Some(PixelPoint::new(5, 5));
        plot.reset_view();
        assert!(plot.view_rect().is_unset());
        assert!(plot.drag.is_none());
    }

    #[test]
    fn fullscreen_cancels_drag() {
        let mut plot = Plot::new();
        plot.drag = Some(PixelPoint::new(5, 5));
        plot.set_fullscreen(true);
        assert!(plot.is_fullscreen());
        assert!(plot.drag.is_none());
    }
}
