pub mod decoration;
pub mod keys;
pub mod rotating_polygon;

pub use decoration::{decoration_for, Decoration, DECORATION_SIZE};
pub use keys::KeyCommand;
pub use rotating_polygon::{AnimatorParams, BounceRule, RotatingPolygon, TickOutcome};
