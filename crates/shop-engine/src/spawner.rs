//! Customer spawn scheduler.
//!
//! Spawn pacing is driven by the viewed month's sales volume: busier months
//! spawn customers faster and allow more of them on the floor at once.  Which
//! brand a new customer shops for is a weighted draw over the selected,
//! in-stock brands, weighted by each brand's month-total sales — so the foot
//! traffic on screen mirrors the recorded demand mix.

use shop_core::{BrandId, Millis, SimRng, SpawnTuning};
use shop_ledger::StockLedger;
use shop_world::{BrandSelection, WorldState};

/// Spawn cadence plus the per-slot weight table for the viewed month.
#[derive(Debug, Clone, Default)]
pub struct SpawnScheduler {
    interval_ms: f64,
    cap:         usize,
    /// Month-total sales per selection slot; the brand-draw weights.
    weights:    Vec<u64>,
    last_spawn: Option<Millis>,
}

impl SpawnScheduler {
    /// Recompute cadence and weights for the current month and selection.
    /// Call whenever either changes.
    pub fn retune(&mut self, tuning: &SpawnTuning, selection: &BrandSelection, world: &WorldState) {
        self.weights = selection
            .ids()
            .iter()
            .map(|&brand| world.month_sales(brand))
            .collect();
        let total: u64 = self.weights.iter().sum();
        self.interval_ms = tuning.interval_for(total);
        self.cap = tuning.cap_for(total);
        self.last_spawn = None;
    }

    /// Maximum concurrent customers for this month.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Current spawn interval in wall-clock milliseconds.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// `true` when a spawn is due at `now`.  The first call after a retune
    /// or reset spawns immediately and starts the cadence from there.
    pub fn due(&mut self, now: Millis) -> bool {
        match self.last_spawn {
            None => {
                self.last_spawn = Some(now);
                true
            }
            Some(last) => {
                if now.since(last) >= self.interval_ms {
                    self.last_spawn = Some(now);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Weighted brand draw over the selected brands that still have stock.
    /// `None` when every selected brand is sold out (or nothing is selected).
    pub fn pick_brand(
        &self,
        selection: &BrandSelection,
        ledger: &StockLedger,
        rng: &mut SimRng,
    ) -> Option<BrandId> {
        let mut candidates: Vec<BrandId> = Vec::with_capacity(selection.len());
        let mut weights: Vec<u64> = Vec::with_capacity(selection.len());
        for (slot, &brand) in selection.ids().iter().enumerate() {
            if ledger.in_stock(brand) {
                candidates.push(brand);
                weights.push(self.weights.get(slot).copied().unwrap_or(0));
            }
        }
        let picked = rng.weighted_pick(&weights)?;
        Some(candidates[picked])
    }

    /// Forget the cadence; the next [`due`](Self::due) fires immediately.
    pub fn reset(&mut self) {
        self.last_spawn = None;
    }
}
