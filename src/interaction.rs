//! Drag-to-pan and cursor-anchored wheel zoom.
//!
//! Pure helpers over the view rectangle; the session owns the drag anchor
//! and decides when to apply them.

use crate::geom::PixelPoint;
use crate::transform::Transform;
use crate::view::ViewRect;

/// Shift the rectangle so the data point that was under the anchor pixel
/// moves under the mouse. Pan, not scale: both spans are unchanged.
pub(crate) fn pan_view(
    rect: ViewRect,
    anchor: PixelPoint,
    mouse: PixelPoint,
    transform: &Transform,
) -> ViewRect {
    let dx = f64::from(anchor.x - mouse.x) * transform.x_per_pixel();
    let dy = f64::from(mouse.y - anchor.y) * transform.y_per_pixel();
    rect.shifted(dx, dy)
}

/// Zoom both axes around the cursor by `zoom_base ^ -wheel_delta`.
///
/// Two passes: rescale the spans anchored at the old minimum corner, then
/// shift by however far the data point under the cursor moved. The anchor
/// point depends on the transform that the rescale itself replaces, so a
/// single-pass formula would drift.
pub(crate) fn zoom_view(
    rect: ViewRect,
    mouse: PixelPoint,
    wheel_delta: f64,
    zoom_base: f64,
    width: i32,
    height: i32,
) -> Option<ViewRect> {
    let transform = Transform::new(rect, width, height)?;
    let before = transform.from_screen(mouse);

    let factor = zoom_base.powf(-wheel_delta);
    let mut scaled = rect;
    scaled.x.max = scaled.x.min + transform.x_span() * factor;
    scaled.y.max = scaled.y.min + transform.y_span() * factor;

    let rescaled = Transform::new(scaled, width, height)?;
    let after = rescaled.from_screen(mouse);
    Some(scaled.shifted(before.x - after.x, before.y - after.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;
    use approx::assert_relative_eq;

    fn rect() -> ViewRect {
        ViewRect::new(Range::new(0.0, 8.0), Range::new(-3.0, 3.0))
    }

    #[test]
    fn pan_keeps_anchor_point_under_mouse() {
        let transform = Transform::new(rect(), 800, 600).expect("valid");
        let anchor = PixelPoint::new(100, 100);
        let mouse = PixelPoint::new(140, 70);
        let under_anchor = transform.from_screen(anchor);

        let panned = pan_view(rect(), anchor, mouse, &transform);
        let after = Transform::new(panned, 800, 600).expect("valid");
        let under_mouse = after.from_screen(mouse);

        assert_relative_eq!(under_mouse.x, under_anchor.x, max_relative = 1e-12);
        assert_relative_eq!(under_mouse.y, under_anchor.y, max_relative = 1e-12);
    }

    #[test]
    fn pan_preserves_spans() {
        let transform = Transform::new(rect(), 800, 600).expect("valid");
        let panned = pan_view(
            rect(),
            PixelPoint::new(10, 10),
            PixelPoint::new(200, 400),
            &transform,
        );
        assert_relative_eq!(panned.x.span(), rect().x.span(), max_relative = 1e-12);
        assert_relative_eq!(panned.y.span(), rect().y.span(), max_relative = 1e-12);
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed() {
        let mouse = PixelPoint::new(623, 41);
        let before = Transform::new(rect(), 800, 600)
            .expect("valid")
            .from_screen(mouse);

        for delta in [3.0, -2.0, 0.5] {
            let zoomed = zoom_view(rect(), mouse, delta, 1.1, 800, 600).expect("valid");
            let after = Transform::new(zoomed, 800, 600)
                .expect("valid")
                .from_screen(mouse);
            assert_relative_eq!(after.x, before.x, max_relative = 1e-9);
            assert_relative_eq!(after.y, before.y, max_relative = 1e-9);
        }
    }

    #[test]
    fn positive_wheel_shrinks_the_spans() {
        let zoomed = zoom_view(rect(), PixelPoint::new(400, 300), 1.0, 1.1, 800, 600)
            .expect("valid");
        assert_relative_eq!(zoomed.x.span(), 8.0 / 1.1, max_relative = 1e-12);
        assert_relative_eq!(zoomed.y.span(), 6.0 / 1.1, max_relative = 1e-12);

        let out = zoom_view(rect(), PixelPoint::new(400, 300), -1.0, 1.1, 800, 600)
            .expect("valid");
        assert_relative_eq!(out.x.span(), 8.0 * 1.1, max_relative = 1e-12);
    }

    #[test]
    fn zoom_rejects_degenerate_view() {
        assert!(zoom_view(ViewRect::unset(), PixelPoint::new(0, 0), 1.0, 1.1, 800, 600).is_none());
    }
}
