use super::{segments_intersect, Point2, TOLERANCE};

/// Intersection of the infinite lines through `p1-p2` and `p3-p4`.
///
/// Uses the determinant form with `D = (x1-x2)(y3-y4) - (y1-y2)(x3-x4)`.
/// Parallel or coincident lines give `D == 0` and the result is non-finite;
/// callers that cannot rule that out should use [`checked_line_intersection`].
#[must_use]
pub fn line_intersection(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Point2 {
    let (x1, y1, x2, y2) = (p1.x, p1.y, p2.x, p2.y);
    let (x3, y3, x4, y4) = (p3.x, p3.y, p4.x, p4.y);

    let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    let a = x1 * y2 - y1 * x2;
    let b = x3 * y4 - y3 * x4;

    Point2::new(
        (a * (x3 - x4) - (x1 - x2) * b) / d,
        (a * (y3 - y4) - (y1 - y2) * b) / d,
    )
}

/// Like [`line_intersection`], but returns `None` for (nearly) parallel lines
/// or any non-finite result.
#[must_use]
pub fn checked_line_intersection(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> Option<Point2> {
    let d = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if d.abs() < TOLERANCE {
        return None;
    }
    let pt = line_intersection(p1, p2, p3, p4);
    (pt.x.is_finite() && pt.y.is_finite()).then_some(pt)
}

/// Crossing point of segments `a-b` and `c-d`.
///
/// Returns `None` if the segments do not cross according to
/// [`segments_intersect`] or if their lines are parallel.
#[must_use]
pub fn segment_intersection(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Option<Point2> {
    if !segments_intersect(a, b, c, d) {
        return None;
    }
    checked_line_intersection(a, b, c, d)
}
