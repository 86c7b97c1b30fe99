//! Floor-plan coordinate type and movement utilities.
//!
//! `Point` uses `f32` pixel coordinates on the store canvas.  Agents move in
//! straight lines at a fixed per-agent speed — no pathfinding, no collision —
//! so the only geometry the engine ever needs is Euclidean distance and a
//! single step along the line to a target.

/// A position on the store floor, in canvas pixels.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in pixels.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// `true` when `other` is within `radius` pixels — the arrival test used
    /// by every agent state transition.
    #[inline]
    pub fn within(self, other: Point, radius: f32) -> bool {
        self.distance(other) < radius
    }

    /// One movement step of length `speed` along the straight line toward
    /// `target`.
    ///
    /// Clamps at the target instead of overshooting, so an agent whose speed
    /// exceeds the remaining distance never oscillates around its goal.
    pub fn step_toward(self, target: Point, speed: f32) -> Point {
        let dist = self.distance(target);
        if dist <= speed || dist == 0.0 {
            return target;
        }
        let scale = speed / dist;
        Point {
            x: self.x + (target.x - self.x) * scale,
            y: self.y + (target.y - self.y) * scale,
        }
    }

    /// Return this point offset by `(dx, dy)` — used for spawn-time jitter.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
