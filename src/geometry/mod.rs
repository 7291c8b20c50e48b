pub mod polygon;
pub mod segment;
pub mod triangle;

pub use polygon::Polygon;
pub use segment::Segment;
pub use triangle::{is_degenerate_triangle, isosceles};
