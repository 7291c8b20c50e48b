use crate::math::{orient, segment_intersection, segments_intersect, Orientation, Point2};

/// A directed segment from `start` to `end`.
///
/// Direction matters for [`Segment::side_of`]; crossing tests do not depend
/// on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the same segment traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Orientation of `pt` relative to the directed line `start -> end`.
    #[must_use]
    pub fn side_of(&self, pt: &Point2) -> Orientation {
        orient(&self.start, &self.end, pt)
    }

    /// Returns true if this segment crosses `other`.
    #[must_use]
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(&self.start, &self.end, &other.start, &other.end)
    }

    /// Returns the crossing point with `other`, if any.
    #[must_use]
    pub fn intersection(&self, other: &Segment) -> Option<Point2> {
        segment_intersection(&self.start, &self.end, &other.start, &other.end)
    }
}
