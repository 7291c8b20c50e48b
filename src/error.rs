use thiserror::Error;

/// Top-level error type for the pivotri core.
#[derive(Debug, Error)]
pub enum PivotriError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// Errors related to geometric setup.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("viewport size {width}x{height} must be finite and positive")]
    InvalidViewport { width: f64, height: f64 },

    #[error("world half extent {0} must be finite and positive")]
    InvalidExtent(f64),

    #[error("vertex index {index} is out of range for a polygon of {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("pick radius {0} must be finite and positive")]
    InvalidPickRadius(f64),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to configuring the polygon animator.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("invalid animator parameters: {0}")]
    InvalidParameters(String),

    #[error("pivot index {index} is out of range for a polygon of {len} vertices")]
    PivotOutOfRange { index: usize, len: usize },

    #[error("vertex index {0} is inactive and cannot serve as pivot")]
    InactivePivot(usize),
}

/// Convenience type alias for results using [`PivotriError`].
pub type Result<T> = std::result::Result<T, PivotriError>;
