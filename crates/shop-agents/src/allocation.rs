//! Per-day sales allocation.
//!
//! Each simulated day has an authoritative per-brand sales target.  Customers
//! claim their share at the checkout transition:
//!
//! ```text
//! share = ceil((sales_target - allocated_so_far) / max(unpaid_count, 1))
//! ```
//!
//! where `unpaid_count` is the number of live customers of that brand that
//! have not yet paid, the claimant included.  Dividing the *remaining* target
//! by the *remaining* payers makes the cumulative allocation converge on the
//! target exactly: once `allocated_so_far` reaches the target every further
//! share is 0, so a day can never oversell its record.

use shop_core::BrandId;

/// Running per-brand allocation totals for the current simulated day.
///
/// Reset at every day transition, before the ledger is rewritten.
#[derive(Debug, Clone)]
pub struct DailyAllocator {
    allocated: Vec<u32>,
}

impl DailyAllocator {
    pub fn new(brand_count: usize) -> Self {
        Self { allocated: vec![0; brand_count] }
    }

    /// Zero every brand's running total.  Called at each day transition.
    pub fn reset(&mut self) {
        self.allocated.fill(0);
    }

    /// Units already claimed against `brand` today.
    pub fn allocated(&self, brand: BrandId) -> u32 {
        self.allocated.get(brand.index()).copied().unwrap_or(0)
    }

    /// Claim one customer's share of `brand`'s remaining target and add it to
    /// the running total.  Returns the units claimed, which may be 0 once the
    /// target is met (the customer still checks out, just buys nothing).
    pub fn claim(&mut self, brand: BrandId, sales_target: u32, unpaid_count: usize) -> u32 {
        let Some(slot) = self.allocated.get_mut(brand.index()) else {
            return 0;
        };
        let remaining = sales_target.saturating_sub(*slot);
        let share = remaining.div_ceil(unpaid_count.max(1) as u32);
        *slot += share;
        share
    }
}
