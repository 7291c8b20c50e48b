use super::{Matrix3, Point2};

/// Turn direction of an ordered point triple, in a Y-up frame.
///
/// The discriminants are the sign of the orientation determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Orientation {
    Clockwise = -1,
    Collinear = 0,
    CounterClockwise = 1,
}

impl Orientation {
    /// Returns the orientation as `-1`, `0` or `+1`.
    #[must_use]
    pub fn sign(self) -> i8 {
        self as i8
    }

    /// Returns the orientation of the reversed traversal.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::Collinear => Self::Collinear,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    fn from_determinant(det: f64) -> Self {
        if det > 0.0 {
            Self::CounterClockwise
        } else if det < 0.0 {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }
}

/// Orientation of the triple `a -> b -> c`.
///
/// Sign of the determinant of `[[1, ax, ay], [1, bx, by], [1, cx, cy]]`.
/// Only an exactly zero determinant counts as collinear.
#[must_use]
pub fn orient(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    #[rustfmt::skip]
    let m = Matrix3::new(
        1.0, a.x, a.y,
        1.0, b.x, b.y,
        1.0, c.x, c.y,
    );
    Orientation::from_determinant(m.determinant())
}

/// Returns true iff segments `a-b` and `c-d` cross.
///
/// Each segment's endpoints must lie on different sides of the other
/// segment's supporting line. Boundary cases are not special-cased: an
/// endpoint resting on the other segment yields `Collinear` on one side,
/// which still differs from the opposite sign, while collinear overlapping
/// segments compare `Collinear == Collinear` and report no crossing.
#[must_use]
pub fn segments_intersect(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    orient(a, b, c) != orient(a, b, d) && orient(c, d, a) != orient(c, d, b)
}
