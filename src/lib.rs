pub mod animation;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod render;
pub mod viewport;

pub use error::{PivotriError, Result};
