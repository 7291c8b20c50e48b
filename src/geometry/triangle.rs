use crate::math::{Point2, Vector2, TOLERANCE};

/// Builds an isosceles triangle with apex `opposite_vertex`.
///
/// With `u = base_point - opposite_vertex`, the base runs through
/// `base_point` perpendicular to `u` with half-length `|u|`. Returns
/// `[opposite_vertex, base_point + (-u.y, u.x), base_point + (u.y, -u.x)]`.
///
/// Coincident inputs collapse the triangle to a single point; see
/// [`is_degenerate_triangle`].
#[must_use]
pub fn isosceles(base_point: &Point2, opposite_vertex: &Point2) -> [Point2; 3] {
    let u = base_point - opposite_vertex;
    let v = Vector2::new(-u.y, u.x);
    let w = Vector2::new(u.y, -u.x);
    [*opposite_vertex, base_point + v, base_point + w]
}

/// Returns true if the triangle has (near) zero area and should not be drawn.
#[must_use]
pub fn is_degenerate_triangle(tri: &[Point2; 3]) -> bool {
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    e1.perp(&e2).abs() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn unit_edge_triangle() {
        let tri = isosceles(&Point2::new(1.0, 0.0), &Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(tri[0], Point2::new(0.0, 0.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(tri[1], Point2::new(1.0, 1.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(tri[2], Point2::new(1.0, -1.0), epsilon = TOLERANCE);
    }

    #[test]
    fn legs_are_equal() {
        let cases = [
            (Point2::new(1.0, 0.0), Point2::new(0.0, 0.0)),
            (Point2::new(200.0, 300.0), Point2::new(300.0, 200.0)),
            (Point2::new(-3.5, 7.25), Point2::new(12.0, -1.0)),
        ];
        for (base, apex) in cases {
            let tri = isosceles(&base, &apex);
            assert_abs_diff_eq!(
                nalgebra::distance(&apex, &tri[1]),
                nalgebra::distance(&apex, &tri[2]),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn base_midpoint_is_base_point() {
        let base = Point2::new(200.0, 300.0);
        let tri = isosceles(&base, &Point2::new(300.0, 200.0));
        let mid = nalgebra::center(&tri[1], &tri[2]);
        assert_abs_diff_eq!(mid, base, epsilon = TOLERANCE);
    }

    #[test]
    fn coincident_points_collapse() {
        let pt = Point2::new(5.0, 5.0);
        let tri = isosceles(&pt, &pt);
        assert_eq!(tri, [pt, pt, pt]);
        assert!(is_degenerate_triangle(&tri));
    }

    #[test]
    fn regular_triangle_is_not_degenerate() {
        let tri = isosceles(&Point2::new(1.0, 0.0), &Point2::origin());
        assert!(!is_degenerate_triangle(&tri));
    }
}
