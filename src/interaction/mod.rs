pub mod drag;
pub mod triangle_tool;

pub use drag::DragState;
pub use triangle_tool::{TriangleTool, TriangleToolParams};

use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a control point.
    pub struct ControlPointId;
}

/// What a control point controls, which decides how a drag moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlRole {
    /// Dragging translates the whole shape.
    Base,
    /// Dragging moves only this point.
    Apex,
}

/// A user-draggable point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub role: ControlRole,
    pub position: Point2,
}

/// Pointer input in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point2),
    Move(Point2),
    Up(Point2),
}

impl PointerEvent {
    /// Pixel position carried by the event.
    #[must_use]
    pub fn position(&self) -> Point2 {
        match *self {
            Self::Down(p) | Self::Move(p) | Self::Up(p) => p,
        }
    }
}
