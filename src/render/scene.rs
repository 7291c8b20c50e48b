use tracing::trace;

use crate::animation::RotatingPolygon;
use crate::geometry::is_degenerate_triangle;
use crate::interaction::TriangleTool;
use crate::viewport::Viewport;

use super::{Canvas, Color, FrameScheduler, Rect};

/// Radius of the disks marking draggable points, in pixels.
pub const CONTROL_POINT_RADIUS: f64 = 5.0;

/// Draws the triangle tool: control point disks and the triangle outline.
///
/// A collapsed triangle is skipped; the control points are still drawn.
pub fn draw_triangle_tool<C: Canvas + ?Sized>(
    canvas: &mut C,
    tool: &TriangleTool,
    viewport: &Viewport,
) {
    canvas.clear(Rect::covering(viewport));
    for (_, cp) in tool.control_points() {
        canvas.draw_circle(cp.position, CONTROL_POINT_RADIUS, Color::BLACK);
    }
    let tri = tool.triangle();
    if !is_degenerate_triangle(&tri) {
        canvas.stroke_path(&tri, Color::BLACK);
    }
}

/// Draws the rotating polygon over the background, then its decorations.
pub fn draw_rotating_polygon<C: Canvas + ?Sized>(
    canvas: &mut C,
    anim: &RotatingPolygon,
    viewport: &Viewport,
) {
    canvas.fill_rect(Rect::covering(viewport), Color::TEAL);
    canvas.fill_path(&anim.snapshot(), Color::PURPLE);
    for decoration in anim.decorations() {
        canvas.fill_path(&decoration.corners, decoration.color);
    }
}

/// Ticks and draws `anim` once per frame until `scheduler` stops.
///
/// The first frame is drawn unconditionally. Returns the number of frames.
pub fn run_animation<C, S>(
    anim: &mut RotatingPolygon,
    canvas: &mut C,
    scheduler: &mut S,
    viewport: &Viewport,
) -> u64
where
    C: Canvas + ?Sized,
    S: FrameScheduler + ?Sized,
{
    let mut frames = 0;
    loop {
        anim.tick();
        draw_rotating_polygon(canvas, anim, viewport);
        frames += 1;
        if !scheduler.request_next_frame() {
            trace!(frames, "animation stopped by host");
            return frames;
        }
    }
}
