use std::collections::BTreeSet;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A fixed-size ring of vertex positions.
///
/// Indices wrap modulo the vertex count, so any `usize` addresses a vertex.
/// Some slots may be marked inactive: they keep their position but are
/// skipped by [`Polygon::active_indices`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    positions: Vec<Point2>,
    inactive: BTreeSet<usize>,
}

impl Polygon {
    /// Creates a polygon from `positions`, with every slot active.
    ///
    /// # Errors
    ///
    /// Returns an error if `positions` is empty.
    pub fn new(positions: Vec<Point2>) -> Result<Self> {
        Self::with_inactive(positions, [])
    }

    /// Creates a polygon with the given slots marked inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if `positions` is empty or an inactive index is not
    /// below `positions.len()`.
    pub fn with_inactive(
        positions: Vec<Point2>,
        inactive: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        if positions.is_empty() {
            return Err(GeometryError::Degenerate("polygon has no vertices".into()).into());
        }
        let len = positions.len();
        let inactive: BTreeSet<usize> = inactive.into_iter().collect();
        if let Some(&index) = inactive.iter().find(|&&i| i >= len) {
            return Err(GeometryError::IndexOutOfRange { index, len }.into());
        }
        Ok(Self {
            positions,
            inactive,
        })
    }

    /// Number of slots, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; a polygon holds at least one vertex.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn slot(&self, index: usize) -> usize {
        index % self.positions.len()
    }

    /// Position of vertex `index`, wrapping.
    #[must_use]
    pub fn get(&self, index: usize) -> Point2 {
        self.positions[self.slot(index)]
    }

    /// Overwrites vertex `index`, wrapping.
    pub fn set(&mut self, index: usize, pt: Point2) {
        let slot = self.slot(index);
        self.positions[slot] = pt;
    }

    /// Returns true if the (wrapped) slot takes part in animation and drawing.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        !self.inactive.contains(&self.slot(index))
    }

    /// Active slot indices in ascending order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.positions.len()).filter(|i| !self.inactive.contains(i))
    }

    /// Positions of the active slots, in slot order.
    #[must_use]
    pub fn active_positions(&self) -> Vec<Point2> {
        self.active_indices().map(|i| self.positions[i]).collect()
    }
}
