//! `shop-ledger` — the shared per-brand stock counter.
//!
//! # Why this exists
//!
//! Both agent pools mutate the same stock numbers every tick: customers
//! decrement at checkout, employees credit deliveries.  Keeping the counters
//! in one owned struct with saturating arithmetic gives the two pools a
//! single mutation point and makes the "never negative" invariant a property
//! of the type rather than of every call site.
//!
//! The ledger is only an *animated approximation*.  At every day boundary
//! (and on reset/seek) it is overwritten wholesale from the authoritative
//! starting stock, so within-day drift never carries into the next day.

use shop_core::BrandId;

#[cfg(test)]
mod tests;

/// Per-brand current stock, indexed by [`BrandId`].
///
/// Values are `u32` and can never go negative: debits saturate at zero and
/// report how much was actually applied.
#[derive(Debug, Clone, Default)]
pub struct StockLedger {
    levels: Vec<u32>,
}

impl StockLedger {
    /// A ledger for `brand_count` brands, all starting at zero stock.
    pub fn new(brand_count: usize) -> Self {
        Self { levels: vec![0; brand_count] }
    }

    /// Current stock for `brand`; 0 for out-of-range ids.
    #[inline]
    pub fn level(&self, brand: BrandId) -> u32 {
        self.levels.get(brand.index()).copied().unwrap_or(0)
    }

    /// `true` when `brand` has at least one unit on the shelf.
    #[inline]
    pub fn in_stock(&self, brand: BrandId) -> bool {
        self.level(brand) > 0
    }

    /// Overwrite one brand's level with an authoritative value.
    pub fn set_level(&mut self, brand: BrandId, level: u32) {
        if let Some(slot) = self.levels.get_mut(brand.index()) {
            *slot = level;
        }
    }

    /// Remove up to `quantity` units, flooring at zero.
    ///
    /// Returns the amount actually removed — less than `quantity` when the
    /// shelf runs dry mid-purchase.
    pub fn debit(&mut self, brand: BrandId, quantity: u32) -> u32 {
        match self.levels.get_mut(brand.index()) {
            None => 0,
            Some(slot) => {
                let applied = (*slot).min(quantity);
                *slot -= applied;
                applied
            }
        }
    }

    /// Add `quantity` units (an employee delivery), saturating on overflow.
    pub fn credit(&mut self, brand: BrandId, quantity: u32) {
        if let Some(slot) = self.levels.get_mut(brand.index()) {
            *slot = slot.saturating_add(quantity);
        }
    }

    /// Number of brand slots.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterator over `(BrandId, level)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (BrandId, u32)> + '_ {
        self.levels
            .iter()
            .enumerate()
            .map(|(i, &level)| (BrandId(i as u16), level))
    }
}
