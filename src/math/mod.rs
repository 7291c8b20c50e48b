pub mod intersect_2d;
pub mod orient_2d;
pub mod rotate_2d;

pub use intersect_2d::{checked_line_intersection, line_intersection, segment_intersection};
pub use orient_2d::{orient, segments_intersect, Orientation};
pub use rotate_2d::rotate_about;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 matrix, used for homogeneous determinants.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
