use nalgebra::Rotation2;

use super::Point2;

/// Rotates `point` about `pivot` by `angle` radians.
///
/// Applies `x' = x cos - y sin`, `y' = x sin + y cos` to the offset from the
/// pivot. In pixel space (Y down) a positive angle turns clockwise.
#[must_use]
pub fn rotate_about(point: &Point2, angle: f64, pivot: &Point2) -> Point2 {
    pivot + Rotation2::new(angle) * (point - pivot)
}
