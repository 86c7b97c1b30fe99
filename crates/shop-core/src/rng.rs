//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The engine owns exactly one `SimRng`, seeded from `ReplayConfig::seed`.
//! Every stochastic decision — spawn-time brand selection, per-agent walking
//! speed, positional jitter at shelves and checkout — draws from it in tick
//! order, so a run is fully reproducible from (dataset, seed, timestamps).
//! Tests that need exact agent trajectories fix all three.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for all engine-level stochastic draws.
///
/// Wraps `SmallRng`; intentionally `!Sync` — the tick loop is single-threaded
/// and the RNG must never be shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniform offset in the box `[-half_x, half_x) × [-half_y, half_y)` —
    /// the positional jitter applied when an agent picks a shelf or checkout
    /// target.
    ///
    /// Returns `(0.0, 0.0)` when either half-extent is zero or negative.
    pub fn jitter(&mut self, half_x: f32, half_y: f32) -> (f32, f32) {
        if half_x <= 0.0 || half_y <= 0.0 {
            return (0.0, 0.0);
        }
        (
            self.0.gen_range(-half_x..half_x),
            self.0.gen_range(-half_y..half_y),
        )
    }

    /// Weighted random index draw over `weights`.
    ///
    /// Returns `None` for an empty slice.  When every weight is zero the
    /// first index is returned — a degenerate month with no recorded sales
    /// still spawns *some* brand rather than none.
    pub fn weighted_pick(&mut self, weights: &[u64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }
        let total: u64 = weights.iter().sum();
        if total == 0 {
            return Some(0);
        }
        let mut remaining = self.0.gen_range(0..total);
        for (i, &w) in weights.iter().enumerate() {
            if remaining < w {
                return Some(i);
            }
            remaining -= w;
        }
        // Only reachable if the weights sum overflowed; fall back to the
        // last index.
        Some(weights.len() - 1)
    }
}
