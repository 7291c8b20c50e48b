use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Pixel dimensions of the drawing surface.
///
/// Fixed once created from the surface's reported size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport of `width` x `height` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GeometryError::InvalidViewport { width, height }.into());
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Maps a world point in `[-half_extent, half_extent]^2` (Y up) to pixels
    /// (Y down).
    #[must_use]
    pub fn map_to_viewport(&self, x: f64, y: f64, half_extent: f64) -> Point2 {
        let span = 2.0 * half_extent;
        Point2::new(
            (x + half_extent) * self.width / span,
            (-y + half_extent) * self.height / span,
        )
    }

    /// Inverse of [`Viewport::map_to_viewport`].
    #[must_use]
    pub fn map_to_world(&self, px: f64, py: f64, half_extent: f64) -> Point2 {
        let span = 2.0 * half_extent;
        Point2::new(
            px * span / self.width - half_extent,
            half_extent - py * span / self.height,
        )
    }
}

/// The square world window `[-half_extent, half_extent]^2` shown in a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldWindow {
    half_extent: f64,
}

impl WorldWindow {
    /// Half extent used when none is configured.
    pub const DEFAULT_HALF_EXTENT: f64 = 2.5;

    /// Creates a world window.
    ///
    /// # Errors
    ///
    /// Returns an error if `half_extent` is not finite and positive.
    pub fn new(half_extent: f64) -> Result<Self> {
        if !(half_extent.is_finite() && half_extent > 0.0) {
            return Err(GeometryError::InvalidExtent(half_extent).into());
        }
        Ok(Self { half_extent })
    }

    #[must_use]
    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    /// Maps a world point into `viewport` pixels.
    #[must_use]
    pub fn to_viewport(&self, viewport: &Viewport, world: &Point2) -> Point2 {
        viewport.map_to_viewport(world.x, world.y, self.half_extent)
    }

    /// Maps a pixel position in `viewport` back to world units.
    #[must_use]
    pub fn to_world(&self, viewport: &Viewport, pixel: &Point2) -> Point2 {
        viewport.map_to_world(pixel.x, pixel.y, self.half_extent)
    }
}

impl Default for WorldWindow {
    fn default() -> Self {
        Self {
            half_extent: Self::DEFAULT_HALF_EXTENT,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn origin_maps_to_center() {
        let vp = Viewport::new(500.0, 500.0).unwrap();
        let pt = vp.map_to_viewport(0.0, 0.0, 5.0);
        assert_abs_diff_eq!(pt.x, 250.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(pt.y, 250.0, epsilon = TOLERANCE);
    }

    #[test]
    fn corners_map_with_y_flipped() {
        let vp = Viewport::new(400.0, 200.0).unwrap();
        let top_left = vp.map_to_viewport(-2.5, 2.5, 2.5);
        let bottom_right = vp.map_to_viewport(2.5, -2.5, 2.5);
        assert_abs_diff_eq!(top_left, Point2::new(0.0, 0.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(bottom_right, Point2::new(400.0, 200.0), epsilon = TOLERANCE);
    }

    #[test]
    fn default_window_maps_unit_square_corner() {
        let vp = Viewport::new(400.0, 400.0).unwrap();
        let pt = WorldWindow::default().to_viewport(&vp, &Point2::new(-0.5, 0.5));
        assert_abs_diff_eq!(pt, Point2::new(160.0, 160.0), epsilon = TOLERANCE);
    }

    #[test]
    fn world_round_trip() {
        let vp = Viewport::new(640.0, 480.0).unwrap();
        let window = WorldWindow::new(3.0).unwrap();
        let world = Point2::new(1.25, -0.75);
        let back = window.to_world(&vp, &window.to_viewport(&vp, &world));
        assert_abs_diff_eq!(back, world, epsilon = 1e-12);
    }

    #[test]
    fn invalid_viewport_rejected() {
        assert!(Viewport::new(0.0, 10.0).is_err());
        assert!(Viewport::new(10.0, -1.0).is_err());
        assert!(Viewport::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn invalid_extent_rejected() {
        assert!(WorldWindow::new(0.0).is_err());
        assert!(WorldWindow::new(f64::INFINITY).is_err());
    }
}
