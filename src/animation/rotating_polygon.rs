use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{AnimationError, Result};
use crate::geometry::Polygon;
use crate::math::{rotate_about, Point2};
use crate::viewport::{Viewport, WorldWindow};

use super::{decoration_for, Decoration, KeyCommand};

/// How leaving the bounds reverses the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BounceRule {
    /// Flip once per tick if any vertex left the bounds.
    #[default]
    PerTick,
    /// Flip once per offending vertex, so an even count cancels out.
    PerVertex,
}

/// Configuration of a [`RotatingPolygon`].
#[derive(Debug, Clone)]
pub struct AnimatorParams {
    /// Vertex positions in world units.
    pub world_vertices: Vec<Point2>,
    /// Slots kept in the ring but never rotated or drawn.
    pub inactive: Vec<usize>,
    /// Vertex whose mapped position is the initial pivot.
    pub initial_pivot: usize,
    /// Signed rotation per tick, in radians.
    pub angle: f64,
    /// Upper bound of the square `[0, bounds_max]^2` vertices must stay in.
    pub bounds_max: f64,
    pub bounce: BounceRule,
    pub window: WorldWindow,
}

impl Default for AnimatorParams {
    /// Unit square stored as two triangles; slots 3 and 4 duplicate corners.
    fn default() -> Self {
        Self {
            world_vertices: vec![
                Point2::new(-0.5, -0.5),
                Point2::new(0.5, -0.5),
                Point2::new(0.5, 0.5),
                Point2::new(-0.5, -0.5),
                Point2::new(0.5, 0.5),
                Point2::new(-0.5, 0.5),
            ],
            inactive: vec![3, 4],
            initial_pivot: 5,
            angle: 0.034,
            bounds_max: 400.0,
            bounce: BounceRule::PerTick,
            window: WorldWindow::default(),
        }
    }
}

impl AnimatorParams {
    /// Checks that the parameters describe a runnable animation.
    ///
    /// # Errors
    ///
    /// Returns an error if the angle is not finite, the bounds are not
    /// finite and positive, or the initial pivot is not an active vertex.
    pub fn validate(&self) -> Result<()> {
        if !self.angle.is_finite() {
            return Err(AnimationError::InvalidParameters(format!(
                "angle {} is not finite",
                self.angle
            ))
            .into());
        }
        if !(self.bounds_max.is_finite() && self.bounds_max > 0.0) {
            return Err(AnimationError::InvalidParameters(format!(
                "bounds_max {} must be finite and positive",
                self.bounds_max
            ))
            .into());
        }
        let len = self.world_vertices.len();
        if self.initial_pivot >= len {
            return Err(AnimationError::PivotOutOfRange {
                index: self.initial_pivot,
                len,
            }
            .into());
        }
        if self.inactive.contains(&self.initial_pivot) {
            return Err(AnimationError::InactivePivot(self.initial_pivot).into());
        }
        Ok(())
    }
}

/// Result of one [`RotatingPolygon::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Number of active vertices that ended the tick out of bounds.
    pub escaped: usize,
    /// Whether the rotation direction was reversed.
    pub flipped: bool,
}

/// A polygon spinning about a selectable pivot inside a square bound.
///
/// Key commands are queued and applied at the start of the next tick, so a
/// tick always rotates every vertex with the same pivot and angle.
#[derive(Debug, Clone)]
pub struct RotatingPolygon {
    polygon: Polygon,
    pivot: Point2,
    angle: f64,
    angle_total: f64,
    bounds_max: f64,
    bounce: BounceRule,
    pending: VecDeque<KeyCommand>,
    ticks: u64,
}

impl RotatingPolygon {
    /// Maps `params.world_vertices` into `viewport` and sets the pivot.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail [`AnimatorParams::validate`]
    /// or describe an empty polygon.
    pub fn new(viewport: &Viewport, params: AnimatorParams) -> Result<Self> {
        params.validate()?;
        let positions = params
            .world_vertices
            .iter()
            .map(|v| params.window.to_viewport(viewport, v))
            .collect();
        let polygon = Polygon::with_inactive(positions, params.inactive.iter().copied())?;
        let pivot = polygon.get(params.initial_pivot);
        Ok(Self {
            polygon,
            pivot,
            angle: params.angle,
            angle_total: 0.0,
            bounds_max: params.bounds_max,
            bounce: params.bounce,
            pending: VecDeque::new(),
            ticks: 0,
        })
    }

    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[must_use]
    pub fn pivot(&self) -> Point2 {
        self.pivot
    }

    /// Signed rotation applied by the next tick.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Sum of the angles applied by all ticks so far.
    #[must_use]
    pub fn angle_total(&self) -> f64 {
        self.angle_total
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Positions of the active vertices, in slot order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Point2> {
        self.polygon.active_positions()
    }

    /// Queues the command bound to `key`. Returns false for unmapped keys.
    pub fn push_key(&mut self, key: char) -> bool {
        match KeyCommand::from_key(key) {
            Some(cmd) => {
                self.push_command(cmd);
                true
            }
            None => false,
        }
    }

    /// Queues `cmd` for the next tick.
    pub fn push_command(&mut self, cmd: KeyCommand) {
        self.pending.push_back(cmd);
    }

    /// Number of commands waiting for the next tick.
    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    fn apply(&mut self, cmd: KeyCommand) {
        match cmd {
            KeyCommand::ToggleDirection => {
                self.angle = -self.angle;
                debug!(angle = self.angle, "rotation direction toggled");
            }
            KeyCommand::SelectPivot(index) => {
                self.pivot = self.polygon.get(index);
                debug!(index, x = self.pivot.x, y = self.pivot.y, "pivot selected");
            }
        }
    }

    fn in_bounds(&self, pt: &Point2) -> bool {
        let range = 0.0..=self.bounds_max;
        range.contains(&pt.x) && range.contains(&pt.y)
    }

    /// Advances the animation by one frame.
    ///
    /// Applies queued commands, rotates every active vertex about the pivot,
    /// stores the new positions, then reverses direction according to the
    /// [`BounceRule`] if vertices left the bounds.
    pub fn tick(&mut self) -> TickOutcome {
        while let Some(cmd) = self.pending.pop_front() {
            self.apply(cmd);
        }

        let angle = self.angle;
        let rotated: Vec<(usize, Point2)> = self
            .polygon
            .active_indices()
            .map(|i| (i, rotate_about(&self.polygon.get(i), angle, &self.pivot)))
            .collect();
        let escaped = rotated.iter().filter(|(_, p)| !self.in_bounds(p)).count();

        for (i, pt) in rotated {
            self.polygon.set(i, pt);
        }

        let flipped = match self.bounce {
            BounceRule::PerTick => escaped > 0,
            BounceRule::PerVertex => escaped % 2 == 1,
        };
        if flipped {
            self.angle = -self.angle;
            debug!(escaped, angle = self.angle, "bounds hit, direction reversed");
        }

        self.angle_total += angle;
        self.ticks += 1;
        trace!(tick = self.ticks, angle_total = self.angle_total, "tick");

        TickOutcome { escaped, flipped }
    }

    /// Per-vertex decorations for the current state.
    #[must_use]
    pub fn decorations(&self) -> Vec<Decoration> {
        self.polygon
            .active_indices()
            .filter_map(|i| decoration_for(i, &self.polygon.get(i), self.angle_total))
            .collect()
    }
}
