//! quickplot renders numeric series on a zoomable, pannable Cartesian view.
//!
//! The caller rebuilds its series every frame through [`Frame`]'s builder API
//! while [`Plot`] persists the visible rectangle across frames, infers bounds
//! from the data when the view is unset, and drives drag-to-pan and
//! cursor-anchored wheel zoom from the input snapshot of an abstract
//! [`Surface`]. Windowing, event polling and rasterization stay on the host
//! side of the [`Surface`] trait.

#![forbid(unsafe_code)]

pub mod axis;
pub mod geom;
mod interaction;
pub mod plot;
pub mod render;
pub mod series;
pub mod surface;
pub mod transform;
pub mod view;

pub use axis::{TickPlan, Ticks};
pub use geom::{PixelPoint, Point};
pub use plot::{Frame, FrameError, FrameReport, MalformedPolicy, Plot, SessionConfig};
pub use render::Color;
pub use series::{Series, SeriesBuilder, SeriesError};
pub use surface::{MouseButton, PlotCommand, Surface};
pub use transform::Transform;
pub use view::{Range, ViewRect};
