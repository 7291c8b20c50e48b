use crate::math::{rotate_about, Point2};
use crate::render::Color;

/// Side length of a vertex decoration square, in pixels.
pub const DECORATION_SIZE: f64 = 10.0;

/// Quadrant `(sx, sy)` each decorated vertex grows into, and its color.
const DECORATIONS: [(usize, f64, f64, Color); 4] = [
    (0, 1.0, -1.0, Color::GREEN),
    (1, -1.0, -1.0, Color::BLUE),
    (2, -1.0, 1.0, Color::WHITE),
    (5, 1.0, 1.0, Color::RED),
];

/// A small square pinned to a polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    /// Vertex slot the decoration belongs to.
    pub index: usize,
    /// Corners in drawing order; the first is the vertex itself.
    pub corners: [Point2; 4],
    pub color: Color,
}

/// Decoration for vertex `index` at `anchor`, spun by `spin` about the anchor.
///
/// Returns `None` for slots without a decoration.
#[must_use]
pub fn decoration_for(index: usize, anchor: &Point2, spin: f64) -> Option<Decoration> {
    let &(_, sx, sy, color) = DECORATIONS.iter().find(|(i, ..)| *i == index)?;
    let dx = sx * DECORATION_SIZE;
    let dy = sy * DECORATION_SIZE;
    let corner = |x: f64, y: f64| rotate_about(&Point2::new(x, y), spin, anchor);
    Some(Decoration {
        index,
        corners: [
            *anchor,
            corner(anchor.x + dx, anchor.y),
            corner(anchor.x + dx, anchor.y + dy),
            corner(anchor.x, anchor.y + dy),
        ],
        color,
    })
}
