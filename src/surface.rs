//! The drawing and input collaborator the engine runs against.
//!
//! The session never creates windows or polls events itself; the host shell
//! implements [`Surface`] over whatever windowing system it uses and calls
//! [`crate::plot::Plot::frame`] once per refresh.

use crate::geom::PixelPoint;
use crate::render::Color;

/// Mouse buttons the engine can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left button, used for drag-to-pan.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
}

/// Edge-triggered commands the host maps its own key bindings onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotCommand {
    /// Clear the persisted view range back to auto-fit.
    ResetView,
    /// Flip the fullscreen flag.
    ToggleFullscreen,
}

/// Per-frame capability set consumed by the session.
///
/// Queries are snapshots for the current frame; draw calls are infallible.
pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> (i32, i32);

    /// Current mouse position in pixels.
    fn mouse_position(&self) -> PixelPoint;

    /// Whether a mouse button is currently held.
    fn is_mouse_down(&self, button: MouseButton) -> bool;

    /// Signed wheel scroll delta accumulated this frame.
    fn wheel_delta(&self) -> f64;

    /// Whether a command's key binding was pressed this frame.
    fn was_command_pressed(&self, command: PlotCommand) -> bool;

    /// Request fullscreen on or off.
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Draw a line between two pixel points.
    ///
    /// Implementations are expected to omit the terminal pixel of the
    /// segment, matching common line rasterizers; the renderer compensates.
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Color);

    /// Draw a single pixel.
    fn draw_point(&mut self, at: PixelPoint, color: Color);

    /// Draw text with its top-left corner at the given position.
    fn draw_text(&mut self, text: &str, at: PixelPoint, color: Color);

    /// Pixel width and height the text would occupy.
    fn text_size(&self, text: &str) -> (i32, i32);
}
