//! Plain record types mirroring the upstream simulation service's output.
//!
//! Field names match the service's CSV/JSON columns one-to-one so the
//! loaders can `Deserialize` rows directly, without rename maps.

use serde::Deserialize;

// ── BrandConfig ───────────────────────────────────────────────────────────────

/// Per-brand simulation configuration.
///
/// The engine only consults `initial_stock`, and only as a fallback when no
/// daily record covers a (day, brand) pair.  The reorder/restock fields
/// describe the upstream service's automatic-restock policy — configuration
/// only, never separately animated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrandConfig {
    pub initial_stock:     u32,
    pub restock_days:      u32,
    pub restock_quantity:  u32,
    pub reorder_point:     u32,
    pub reorder_quantity:  u32,
    pub demand_multiplier: f32,
}

impl Default for BrandConfig {
    /// The upstream service's own defaults.
    fn default() -> Self {
        Self {
            initial_stock:     1_000,
            restock_days:      25,
            restock_quantity:  500,
            reorder_point:     200,
            reorder_quantity:  500,
            demand_multiplier: 1.0,
        }
    }
}

// ── DailyRecord ───────────────────────────────────────────────────────────────

/// Ground truth for one (absolute day, brand) pair.  Immutable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyRecord {
    /// Absolute 0-based day index across the whole simulation run.
    pub day:   u32,
    /// Calendar date as `YYYY-MM-DD`.
    pub date:  String,
    pub brand: String,

    pub demand:       u32,
    pub sales:        u32,
    pub stock_before: u32,
    pub stock_after:  u32,
    pub revenue:      f64,
    /// 1 when the brand sold out this day, else 0.
    pub stockout:     u32,
    pub lost_sales:   u32,
    pub price_per_unit: f64,

    pub season:              String,
    pub season_type:         String,
    pub quarter:             String,
    pub festival:            String,
    pub festival_multiplier: f32,
}

impl DailyRecord {
    /// Calendar month (1–12) parsed from the `date` field, or `None` when
    /// the date is malformed.  Used to reject records that fall outside the
    /// viewed month's calendar window.
    pub fn calendar_month(&self) -> Option<u32> {
        let month = self.date.split('-').nth(1)?;
        month.parse::<u32>().ok().filter(|m| (1..=12).contains(m))
    }
}

// ── MonthlyRecord ─────────────────────────────────────────────────────────────

/// Month-level aggregate for one brand.  Drives spawn weighting and the
/// concurrency cap; never consulted for stock.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyRecord {
    /// Calendar month number (1–12).
    pub month: u32,
    pub brand: String,

    pub total_sales:   u64,
    pub total_revenue: f64,
    pub avg_stock:     f32,
    pub stockout_days: u32,
}

// ── RestockEvent ──────────────────────────────────────────────────────────────

/// An authoritative stock delivery recorded by the upstream service.
///
/// Exposed per viewed month for the hosting UI's event list.  Agent movement
/// does **not** consume these — employee spawns are detected by comparing
/// consecutive days' `stock_after` instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RestockEvent {
    pub day:          u32,
    pub brand:        String,
    pub quantity:     u32,
    pub stock_before: u32,
    pub stock_after:  u32,
}
