//! Wall-clock time model and engine configuration.
//!
//! # Design
//!
//! The replay engine is driven by a periodic host callback (one logical tick
//! per render frame).  The host passes the current wall-clock timestamp into
//! every tick; the engine never reads a system clock itself.  `Millis` wraps
//! that timestamp so elapsed-time arithmetic is explicit and testable —
//! deterministic tests feed synthetic timestamps instead of sleeping.
//!
//! Simulated days advance on a fixed wall-clock cadence
//! (`ReplayConfig::day_duration_ms`, default 2 s per day), independent of the
//! frame rate.

use std::fmt;

// ── Millis ────────────────────────────────────────────────────────────────────

/// A wall-clock timestamp in milliseconds, as supplied by the host's frame
/// callback.  Only differences between timestamps are meaningful.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub f64);

impl Millis {
    pub const ZERO: Millis = Millis(0.0);

    /// Milliseconds elapsed from `earlier` to `self`.  Negative if the host
    /// hands timestamps out of order; callers treat that as "not yet elapsed".
    #[inline]
    pub fn since(self, earlier: Millis) -> f64 {
        self.0 - earlier.0
    }

    /// The timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: f64) -> Millis {
        Millis(self.0 + ms)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} ms", self.0)
    }
}

// ── SpawnTuning ───────────────────────────────────────────────────────────────

/// Tuning constants for the customer spawn scheduler.
///
/// The spawn interval scales inversely with the viewed month's total sales
/// volume around a fixed reference point, then clamps to a bounded range; the
/// concurrency cap scales linearly with volume between fixed bounds.  The
/// defaults reproduce the upstream viewer's pacing.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnTuning {
    /// Interval at exactly `reference_month_sales` units/month.
    pub reference_interval_ms: f64,
    /// Month-sales volume at which the reference interval applies.
    pub reference_month_sales: u64,
    /// Floor applied to the volume before division, so tiny months don't
    /// produce absurd intervals.
    pub min_month_sales: u64,
    /// Lower clamp on the spawn interval.
    pub min_interval_ms: f64,
    /// Upper clamp on the spawn interval.
    pub max_interval_ms: f64,
    /// Lower clamp on concurrent customer count.
    pub min_concurrent: usize,
    /// Upper clamp on concurrent customer count.
    pub max_concurrent: usize,
    /// Month-sales units represented by one concurrent customer slot.
    pub sales_per_customer: u64,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            reference_interval_ms: 2_000.0,
            reference_month_sales: 10_000,
            min_month_sales:       1_000,
            min_interval_ms:       500.0,
            max_interval_ms:       3_000.0,
            min_concurrent:        20,
            max_concurrent:        100,
            sales_per_customer:    500,
        }
    }
}

impl SpawnTuning {
    /// Spawn interval for a month with `total_sales` units, clamped to
    /// `[min_interval_ms, max_interval_ms]`.
    pub fn interval_for(&self, total_sales: u64) -> f64 {
        let volume = total_sales.max(self.min_month_sales) as f64;
        let scaled = self.reference_interval_ms * (self.reference_month_sales as f64 / volume);
        scaled.clamp(self.min_interval_ms, self.max_interval_ms)
    }

    /// Concurrent-customer cap for a month with `total_sales` units.
    pub fn cap_for(&self, total_sales: u64) -> usize {
        let derived = (total_sales / self.sales_per_customer.max(1)) as usize;
        derived.clamp(self.min_concurrent, self.max_concurrent)
    }
}

// ── ReplayConfig ──────────────────────────────────────────────────────────────

/// Top-level replay-engine configuration.
///
/// Constructed by the hosting application and passed to the engine builder.
/// All defaults reproduce the upstream viewer's constants.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayConfig {
    /// Wall-clock milliseconds per simulated day.
    pub day_duration_ms: f64,

    /// Master RNG seed.  The same seed always produces identical agent
    /// trajectories for the same dataset and tick timestamps.
    pub seed: u64,

    /// Distance (pixels) at which an agent counts as having arrived at its
    /// target.
    pub arrive_radius: f32,

    /// Ticks an employee spends at the shelf before the delivery lands.
    pub restock_ticks: u32,

    /// Customer walking speed is drawn uniformly from this range (px/tick).
    pub customer_speed_min: f32,
    pub customer_speed_max: f32,

    /// Employee walking speed (px/tick, fixed).
    pub employee_speed: f32,

    /// Customer spawn pacing.
    pub spawn: SpawnTuning,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            day_duration_ms:    2_000.0,
            seed:               0,
            arrive_radius:      5.0,
            restock_ticks:      120,
            customer_speed_min: 4.0,
            customer_speed_max: 6.0,
            employee_speed:     4.0,
            spawn:              SpawnTuning::default(),
        }
    }
}

impl ReplayConfig {
    /// A default config with the given seed — the common construction in
    /// tests and demos.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }
}
