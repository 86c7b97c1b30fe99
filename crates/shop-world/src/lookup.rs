//! `WorldState` — (viewed month, day-in-month) → authoritative day targets.
//!
//! # Day indexing
//!
//! The dataset is indexed by an absolute 0-based day across the whole
//! upstream run.  The viewer shows one fixed-length month window at a time:
//!
//! ```text
//! days_per_month = floor(simulation_days / distinct_month_count)
//! absolute_day   = viewed_month_index * days_per_month + (day_in_month - 1)
//! ```
//!
//! A record only counts for the viewed window when its calendar month (from
//! the `date` field) matches the window's month — a guard against absolute
//! indices that land in a neighbouring month when the run length is not an
//! exact multiple of the month count.  Trailing remainder days past
//! `month_count * days_per_month` are therefore unreachable from every
//! window and fall under the same out-of-month fallback policy.
//!
//! # Fallback policy (not a failure path)
//!
//! Missing or out-of-month records fall back to the brand's configured
//! `initial_stock` (4 000 when no config was supplied) and a sales target of
//! 0.  Every query here is total; nothing in this module can fail.

use shop_core::BrandId;
use shop_data::record::{DailyRecord, RestockEvent};
use shop_data::Dataset;

/// Stock fallback when a brand has no config or a zero `initial_stock`.
pub const DEFAULT_FALLBACK_STOCK: u32 = 4_000;

// ── DayPlan ───────────────────────────────────────────────────────────────────

/// The authoritative targets for one (day-in-month, brand) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPlan {
    /// Stock the day opens with: previous day's `stock_after`, or the
    /// fallback stock.  The ledger is overwritten with this at day start.
    pub starting_stock: u32,
    /// Stock the day should end near: this day's `stock_after`, or the
    /// starting stock when no record covers the day.
    pub target_stock: u32,
    /// Units the day's customers should collectively purchase.
    pub sales_target: u32,
}

// ── WorldState ────────────────────────────────────────────────────────────────

/// Owns the dataset and the viewed-month cursor; answers every per-day and
/// per-month question the engine asks.
pub struct WorldState {
    dataset: Dataset,
    /// Index into `dataset.months()`, not a calendar month number.
    viewed_month: usize,
}

impl WorldState {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, viewed_month: 0 }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    // ── Month window ──────────────────────────────────────────────────────

    /// Index of the viewed month within the dataset's month list.
    pub fn viewed_month(&self) -> usize {
        self.viewed_month
    }

    /// Select a month window; out-of-range indices clamp to the last month.
    pub fn set_viewed_month(&mut self, index: usize) {
        let last = self.dataset.months().len().saturating_sub(1);
        self.viewed_month = index.min(last);
    }

    /// Calendar month number (1–12) of the viewed window.
    pub fn actual_month(&self) -> u32 {
        // The dataset builder rejects empty month lists, so indexing by the
        // clamped cursor always lands on a real entry.
        self.dataset.months()[self.viewed_month]
    }

    pub fn month_count(&self) -> usize {
        self.dataset.months().len()
    }

    /// Length of every viewed window, in days.
    pub fn days_per_month(&self) -> u32 {
        (self.dataset.simulation_days() / self.month_count() as u32).max(1)
    }

    /// Absolute day index for a 1-based day within the viewed window.
    pub fn absolute_day(&self, day_in_month: u32) -> u32 {
        self.viewed_month as u32 * self.days_per_month() + day_in_month.saturating_sub(1)
    }

    // ── Per-day lookups ───────────────────────────────────────────────────

    /// The ground-truth record for `(day_in_month, brand)`, but only when it
    /// belongs to the viewed calendar month.
    pub fn in_month_record(&self, day_in_month: u32, brand: BrandId) -> Option<&DailyRecord> {
        if day_in_month == 0 {
            return None;
        }
        let record = self.dataset.daily(self.absolute_day(day_in_month), brand)?;
        (record.calendar_month() == Some(self.actual_month())).then_some(record)
    }

    /// Fallback stock for `brand`: configured `initial_stock`, or
    /// [`DEFAULT_FALLBACK_STOCK`] when no positive config exists.
    pub fn fallback_stock(&self, brand: BrandId) -> u32 {
        self.dataset
            .config(brand)
            .map(|c| c.initial_stock)
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_FALLBACK_STOCK)
    }

    /// Stock the given day opens with: previous day's `stock_after` when
    /// that record exists and lies in the viewed month, else the fallback.
    pub fn starting_stock(&self, day_in_month: u32, brand: BrandId) -> u32 {
        self.in_month_record(day_in_month.saturating_sub(1), brand)
            .map(|r| r.stock_after)
            .unwrap_or_else(|| self.fallback_stock(brand))
    }

    /// Units this day's customers should collectively purchase; 0 when no
    /// record covers the day.
    pub fn sales_target(&self, day_in_month: u32, brand: BrandId) -> u32 {
        self.in_month_record(day_in_month, brand)
            .map_or(0, |r| r.sales)
    }

    /// The full [`DayPlan`] for one (day, brand) pair.
    pub fn day_plan(&self, day_in_month: u32, brand: BrandId) -> DayPlan {
        let starting_stock = self.starting_stock(day_in_month, brand);
        let record = self.in_month_record(day_in_month, brand);
        DayPlan {
            starting_stock,
            target_stock: record.map_or(starting_stock, |r| r.stock_after),
            sales_target: record.map_or(0, |r| r.sales),
        }
    }

    /// Authoritative stock increase entering `day_in_month`, detected by
    /// comparing consecutive days' `stock_after`.
    ///
    /// `Some(delta)` only when both days have in-month records and the later
    /// one is strictly higher — exactly the condition that spawns one
    /// employee for the brand at the day transition.
    pub fn restock_delta(&self, day_in_month: u32, brand: BrandId) -> Option<u32> {
        let current = self.in_month_record(day_in_month, brand)?;
        let previous = self.in_month_record(day_in_month.saturating_sub(1), brand)?;
        (current.stock_after > previous.stock_after)
            .then(|| current.stock_after - previous.stock_after)
    }

    // ── Month aggregates ──────────────────────────────────────────────────

    /// Month-total units sold by `brand` in the viewed month (0 default).
    /// Drives spawn weighting and the concurrency cap.
    pub fn month_sales(&self, brand: BrandId) -> u64 {
        self.dataset.monthly_sales(self.actual_month(), brand)
    }

    /// Restock events whose absolute day falls inside the viewed window.
    /// Surfaced to the hosting UI; agent movement never consumes these.
    pub fn month_restocks(&self) -> Vec<&RestockEvent> {
        let start = self.viewed_month as u32 * self.days_per_month();
        let end = start + self.days_per_month();
        self.dataset.restocks_in(start, end).collect()
    }

    /// Season/festival passthrough for the day header: the first in-month
    /// record found for the day across all brands.
    pub fn day_ambient(&self, day_in_month: u32) -> Option<&DailyRecord> {
        self.dataset
            .roster()
            .iter()
            .find_map(|(brand, _)| self.in_month_record(day_in_month, brand))
    }
}
