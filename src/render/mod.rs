mod color;
mod scene;

pub use color::Color;
pub use scene::{draw_rotating_polygon, draw_triangle_tool, run_animation, CONTROL_POINT_RADIUS};

use crate::math::Point2;
use crate::viewport::Viewport;

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(origin: Point2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// The whole surface of `viewport`.
    #[must_use]
    pub fn covering(viewport: &Viewport) -> Self {
        Self::new(Point2::origin(), viewport.width(), viewport.height())
    }
}

/// A 2D drawing surface supplied by the host.
///
/// The core only hands it geometry and colors.
pub trait Canvas {
    /// Erases `region` to transparent.
    fn clear(&mut self, region: Rect);

    /// Fills `region` with `color`.
    fn fill_rect(&mut self, region: Rect, color: Color);

    /// Fills the closed path through `points`.
    fn fill_path(&mut self, points: &[Point2], color: Color);

    /// Strokes the closed path through `points`.
    fn stroke_path(&mut self, points: &[Point2], color: Color);

    /// Fills a disk.
    fn draw_circle(&mut self, center: Point2, radius: f64, color: Color);
}

/// Host-side frame pacing, e.g. a display's animation callback.
pub trait FrameScheduler {
    /// Asks for another frame. Returns false once the host stops animating.
    fn request_next_frame(&mut self) -> bool;
}
