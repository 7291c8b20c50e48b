use crate::math::{Point2, Vector2};

use super::ControlPointId;

/// Drag state of an interactive tool.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A control point is held; `previous` is the last pointer position seen.
    Dragging {
        id: ControlPointId,
        previous: Point2,
    },
}

impl DragState {
    /// Starts dragging `id` from pointer position `at`.
    #[must_use]
    pub fn grab(id: ControlPointId, at: Point2) -> Self {
        Self::Dragging { id, previous: at }
    }

    /// Id of the held control point, if any.
    #[must_use]
    pub fn target(&self) -> Option<ControlPointId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Records pointer position `to` and returns the held id with the delta
    /// since the previous position. Returns `None` when idle.
    pub fn advance(&mut self, to: Point2) -> Option<(ControlPointId, Vector2)> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, previous } => {
                let delta = to - *previous;
                *previous = to;
                Some((*id, delta))
            }
        }
    }

    /// Drops any held control point.
    pub fn release(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    fn some_id() -> ControlPointId {
        let mut map: SlotMap<ControlPointId, ()> = SlotMap::with_key();
        map.insert(())
    }

    #[test]
    fn idle_ignores_motion() {
        let mut state = DragState::default();
        assert!(state.advance(Point2::new(10.0, 10.0)).is_none());
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn deltas_chain_from_previous_position() {
        let id = some_id();
        let mut state = DragState::grab(id, Point2::new(0.0, 0.0));
        let (held, d1) = state.advance(Point2::new(3.0, 4.0)).unwrap();
        assert_eq!(held, id);
        assert_eq!(d1, Vector2::new(3.0, 4.0));
        let (_, d2) = state.advance(Point2::new(1.0, 5.0)).unwrap();
        assert_eq!(d2, Vector2::new(-2.0, 1.0));
    }

    #[test]
    fn release_returns_to_idle() {
        let mut state = DragState::grab(some_id(), Point2::origin());
        assert!(state.is_dragging());
        state.release();
        assert!(state.target().is_none());
        state.release();
        assert_eq!(state, DragState::Idle);
    }
}
