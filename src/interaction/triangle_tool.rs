use slotmap::SlotMap;
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::isosceles;
use crate::math::{Point2, Vector2};

use super::{ControlPoint, ControlPointId, ControlRole, DragState, PointerEvent};

/// Initial layout of the triangle tool.
#[derive(Debug, Clone, Copy)]
pub struct TriangleToolParams {
    /// Base control point, in pixels.
    pub base: Point2,
    /// Apex control point, in pixels.
    pub apex: Point2,
    /// Grab distance around a control point, in pixels (inclusive).
    pub pick_radius: f64,
}

impl Default for TriangleToolParams {
    fn default() -> Self {
        Self {
            base: Point2::new(200.0, 300.0),
            apex: Point2::new(300.0, 200.0),
            pick_radius: 5.0,
        }
    }
}

/// Isosceles-triangle construction tool driven by two draggable points.
///
/// Dragging the base translates the whole triangle; dragging the apex
/// reshapes it around a fixed base point.
#[derive(Debug, Clone)]
pub struct TriangleTool {
    points: SlotMap<ControlPointId, ControlPoint>,
    base: ControlPointId,
    apex: ControlPointId,
    pick_radius: f64,
    drag: DragState,
}

impl TriangleTool {
    /// Creates the tool from `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pick radius is not finite and positive.
    pub fn new(params: TriangleToolParams) -> Result<Self> {
        let r = params.pick_radius;
        if !(r.is_finite() && r > 0.0) {
            return Err(GeometryError::InvalidPickRadius(r).into());
        }
        let mut points = SlotMap::with_key();
        let base = points.insert(ControlPoint {
            role: ControlRole::Base,
            position: params.base,
        });
        let apex = points.insert(ControlPoint {
            role: ControlRole::Apex,
            position: params.apex,
        });
        Ok(Self {
            points,
            base,
            apex,
            pick_radius: r,
            drag: DragState::Idle,
        })
    }

    #[must_use]
    pub fn base(&self) -> Point2 {
        self.points[self.base].position
    }

    #[must_use]
    pub fn apex(&self) -> Point2 {
        self.points[self.apex].position
    }

    #[must_use]
    pub fn base_id(&self) -> ControlPointId {
        self.base
    }

    #[must_use]
    pub fn apex_id(&self) -> ControlPointId {
        self.apex
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Control points in hit-test order.
    pub fn control_points(&self) -> impl Iterator<Item = (ControlPointId, &ControlPoint)> {
        self.points.iter()
    }

    /// Current triangle vertices, apex first.
    #[must_use]
    pub fn triangle(&self) -> [Point2; 3] {
        isosceles(&self.base(), &self.apex())
    }

    /// First control point within the pick radius of `at`.
    #[must_use]
    pub fn pick(&self, at: &Point2) -> Option<ControlPointId> {
        self.points
            .iter()
            .find(|(_, cp)| nalgebra::distance(&cp.position, at) <= self.pick_radius)
            .map(|(id, _)| id)
    }

    /// Handles a pointer press. Returns true if a control point was grabbed.
    pub fn pointer_down(&mut self, at: Point2) -> bool {
        match self.pick(&at) {
            Some(id) => {
                debug!(role = ?self.points[id].role, x = at.x, y = at.y, "drag started");
                self.drag = DragState::grab(id, at);
                true
            }
            None => {
                self.drag = DragState::Idle;
                false
            }
        }
    }

    /// Handles pointer motion. Returns true if geometry changed.
    pub fn pointer_move(&mut self, at: Point2) -> bool {
        let Some((id, delta)) = self.drag.advance(at) else {
            return false;
        };
        self.apply_delta(id, delta);
        true
    }

    /// Handles a pointer release.
    pub fn pointer_up(&mut self) {
        if self.drag.is_dragging() {
            debug!("drag stopped");
        }
        self.drag.release();
    }

    /// Dispatches `event`. Returns true if geometry changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let at = event.position();
        match event {
            PointerEvent::Down(_) => {
                self.pointer_down(at);
                false
            }
            PointerEvent::Move(_) => self.pointer_move(at),
            PointerEvent::Up(_) => {
                self.pointer_up();
                false
            }
        }
    }

    fn apply_delta(&mut self, id: ControlPointId, delta: Vector2) {
        let Some(role) = self.points.get(id).map(|cp| cp.role) else {
            return;
        };
        match role {
            ControlRole::Base => {
                for cp in self.points.values_mut() {
                    cp.position += delta;
                }
            }
            ControlRole::Apex => {
                if let Some(cp) = self.points.get_mut(id) {
                    cp.position += delta;
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tool() -> TriangleTool {
        TriangleTool::new(TriangleToolParams::default()).unwrap()
    }

    #[test]
    fn press_near_base_grabs_base() {
        let mut t = tool();
        assert!(t.pointer_down(Point2::new(203.0, 304.0)));
        assert_eq!(t.drag_state().target(), Some(t.base_id()));
    }

    #[test]
    fn pick_radius_is_inclusive() {
        let t = tool();
        assert_eq!(t.pick(&Point2::new(305.0, 200.0)), Some(t.apex_id()));
        assert_eq!(t.pick(&Point2::new(305.1, 200.0)), None);
    }

    #[test]
    fn press_far_away_stays_idle() {
        let mut t = tool();
        assert!(!t.pointer_down(Point2::new(10.0, 10.0)));
        assert!(!t.pointer_move(Point2::new(20.0, 20.0)));
        assert_eq!(t.base(), Point2::new(200.0, 300.0));
        assert_eq!(t.apex(), Point2::new(300.0, 200.0));
    }

    #[test]
    fn dragging_base_translates_both_points() {
        let mut t = tool();
        t.pointer_down(Point2::new(200.0, 300.0));
        assert!(t.pointer_move(Point2::new(210.0, 295.0)));
        assert_eq!(t.base(), Point2::new(210.0, 295.0));
        assert_eq!(t.apex(), Point2::new(310.0, 195.0));
        assert_eq!(t.apex() - t.base(), Vector2::new(100.0, -100.0));
    }

    #[test]
    fn dragging_apex_moves_only_apex() {
        let mut t = tool();
        t.pointer_down(Point2::new(301.0, 201.0));
        t.pointer_move(Point2::new(311.0, 181.0));
        t.pointer_move(Point2::new(306.0, 186.0));
        assert_eq!(t.apex(), Point2::new(305.0, 185.0));
        assert_eq!(t.base(), Point2::new(200.0, 300.0));
    }

    #[test]
    fn release_stops_dragging() {
        let mut t = tool();
        t.handle(PointerEvent::Down(Point2::new(300.0, 200.0)));
        assert!(t.handle(PointerEvent::Move(Point2::new(301.0, 200.0))));
        t.handle(PointerEvent::Up(Point2::new(301.0, 200.0)));
        assert!(!t.handle(PointerEvent::Move(Point2::new(400.0, 400.0))));
        assert_eq!(t.apex(), Point2::new(301.0, 200.0));
        assert_eq!(t.drag_state(), DragState::Idle);
    }

    #[test]
    fn overlapping_points_prefer_first_inserted() {
        let mut t = TriangleTool::new(TriangleToolParams {
            base: Point2::new(100.0, 100.0),
            apex: Point2::new(103.0, 100.0),
            pick_radius: 5.0,
        })
        .unwrap();
        t.pointer_down(Point2::new(102.0, 100.0));
        assert_eq!(t.drag_state().target(), Some(t.base_id()));
    }

    #[test]
    fn triangle_follows_control_points() {
        let mut t = tool();
        let before = t.triangle();
        assert_eq!(before[0], t.apex());
        t.pointer_down(t.base());
        t.pointer_move(t.base() + Vector2::new(5.0, 5.0));
        let after = t.triangle();
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(b - a, Vector2::new(5.0, 5.0));
        }
    }

    #[test]
    fn events_carry_their_position() {
        let mut t = tool();
        let down = PointerEvent::Down(Point2::new(202.0, 298.0));
        assert_eq!(down.position(), Point2::new(202.0, 298.0));
        t.handle(down);
        assert_eq!(t.drag_state().target(), Some(t.base_id()));
        assert!(t.handle(PointerEvent::Move(Point2::new(212.0, 298.0))));
        assert_eq!(t.base(), Point2::new(210.0, 300.0));
    }

    #[test]
    fn invalid_pick_radius_rejected() {
        let params = TriangleToolParams {
            pick_radius: 0.0,
            ..TriangleToolParams::default()
        };
        assert!(TriangleTool::new(params).is_err());
    }
}
