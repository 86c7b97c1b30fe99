//! Customer agents and their pool.
//!
//! # Lifecycle
//!
//! ```text
//! entering ──arrive──▶ browsing ──arrive──▶ checkout ──arrive──▶ exiting ──▶ retired
//!  (door)              (shelf)              (counter)             (door)
//! ```
//!
//! Each customer belongs to exactly one brand, walks in straight lines at a
//! per-agent speed, and transitions when within the arrival radius of its
//! current target.  The purchase happens once, at the checkout transition:
//! the customer claims its allocation share and the ledger is debited on the
//! spot.  Exiting customers are retired once they reach the door (or cross
//! the exit boundary line, whichever comes first).
//!
//! The pool advances every live customer once per tick, in spawn order, then
//! sweeps out the retired ones.  Spawn-order iteration plus a single shared
//! RNG is what keeps replays deterministic.

use std::mem;

use shop_core::{BrandId, CustomerId, Point, SimRng};
use shop_ledger::StockLedger;
use shop_world::{BrandSelection, FloorPlan, CHECKOUT_JITTER_HALF, SHELF_JITTER_HALF};

use crate::allocation::DailyAllocator;

// ── Customer ──────────────────────────────────────────────────────────────────

/// Where a customer is in its shopping trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerState {
    /// Walking from the entrance to the brand's shelf.
    Entering,
    /// Walking to (or milling near) the shelf; next stop is checkout.
    Browsing,
    /// Walking to the checkout counter; pays on arrival.
    Checkout,
    /// Paid; walking to the door.
    Exiting,
}

impl std::fmt::Display for CustomerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CustomerState::Entering => "entering",
            CustomerState::Browsing => "browsing",
            CustomerState::Checkout => "checkout",
            CustomerState::Exiting => "exiting",
        };
        write!(f, "{label}")
    }
}

/// One live customer agent.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id:     CustomerId,
    pub brand:  BrandId,
    pub pos:    Point,
    pub target: Point,
    pub state:  CustomerState,
    /// Display colour, fixed at spawn from the brand's selection slot.
    pub color: &'static str,
    /// Walking speed in px/tick, drawn at spawn.
    pub speed: f32,
    /// Set at the checkout transition; guards against double allocation.
    pub purchased: bool,
}

// ── CustomerCtx ───────────────────────────────────────────────────────────────

/// Everything one pool advance needs from the engine.
pub struct CustomerCtx<'a> {
    pub plan:      &'a FloorPlan,
    pub selection: &'a BrandSelection,
    /// Arrival radius for state transitions, in pixels.
    pub arrive_radius: f32,
    /// Today's per-brand sales targets, indexed by `BrandId` over the roster.
    pub sales_targets: &'a [u32],
    pub allocator: &'a mut DailyAllocator,
    pub ledger:    &'a mut StockLedger,
    pub rng:       &'a mut SimRng,
}

// ── CustomerPool ──────────────────────────────────────────────────────────────

/// All live customers plus the run's spawn counters.
#[derive(Debug, Default)]
pub struct CustomerPool {
    customers: Vec<Customer>,
    next_id:   u32,

    total_spawned:    u64,
    spawned_by_brand: Vec<u64>,
}

impl CustomerPool {
    pub fn new(brand_count: usize) -> Self {
        Self {
            customers: Vec::new(),
            next_id: 0,
            total_spawned: 0,
            spawned_by_brand: vec![0; brand_count],
        }
    }

    /// Live customers in spawn order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Customers spawned since the last stats reset, across all brands.
    pub fn total_spawned(&self) -> u64 {
        self.total_spawned
    }

    /// Customers spawned for `brand` since the last stats reset.
    pub fn spawned_for(&self, brand: BrandId) -> u64 {
        self.spawned_by_brand.get(brand.index()).copied().unwrap_or(0)
    }

    /// Live customers of `brand` that have not paid yet.
    pub fn unpaid_count(&self, brand: BrandId) -> usize {
        self.customers
            .iter()
            .filter(|c| c.brand == brand && !c.purchased)
            .count()
    }

    /// Spawn one customer at the entrance, heading for its brand's shelf.
    pub fn spawn(
        &mut self,
        brand: BrandId,
        color: &'static str,
        entrance: Point,
        speed: f32,
    ) -> CustomerId {
        let id = CustomerId(self.next_id);
        self.next_id += 1;
        self.total_spawned += 1;
        if let Some(count) = self.spawned_by_brand.get_mut(brand.index()) {
            *count += 1;
        }

        self.customers.push(Customer {
            id,
            brand,
            pos: entrance,
            target: entrance,
            state: CustomerState::Entering,
            color,
            speed,
            purchased: false,
        });
        id
    }

    /// Advance every live customer one tick, then sweep out the ones that
    /// reached the door.
    pub fn advance(&mut self, ctx: &mut CustomerCtx<'_>) {
        for i in 0..self.customers.len() {
            let c = &self.customers[i];
            let (pos, target, state, brand) = (c.pos, c.target, c.state, c.brand);

            if !pos.within(target, ctx.arrive_radius) {
                let speed = c.speed;
                self.customers[i].pos = pos.step_toward(target, speed);
                continue;
            }

            match state {
                CustomerState::Entering => {
                    // A shelf can be missing if the selection shrank under a
                    // live agent; it just waits at the door until the sweep
                    // after the next reset.
                    let shelf = ctx
                        .selection
                        .slot_of(brand)
                        .and_then(|slot| ctx.plan.shelf(slot));
                    if let Some(shelf) = shelf {
                        let (half_x, half_y) = SHELF_JITTER_HALF;
                        let (dx, dy) = ctx.rng.jitter(half_x, half_y);
                        let c = &mut self.customers[i];
                        c.target = shelf.offset(dx, dy);
                        c.state = CustomerState::Browsing;
                    }
                }
                CustomerState::Browsing => {
                    let (half_x, half_y) = CHECKOUT_JITTER_HALF;
                    let (dx, dy) = ctx.rng.jitter(half_x, half_y);
                    let checkout = ctx.plan.checkout;
                    let c = &mut self.customers[i];
                    c.target = checkout.offset(dx, dy);
                    c.state = CustomerState::Checkout;
                }
                CustomerState::Checkout => {
                    if !self.customers[i].purchased {
                        // The claimant is still unpaid here, so the count
                        // includes it and the divisor is never zero for a
                        // live claim.
                        let unpaid = self.unpaid_count(brand);
                        let target_sales = ctx
                            .sales_targets
                            .get(brand.index())
                            .copied()
                            .unwrap_or(0);
                        let share = ctx.allocator.claim(brand, target_sales, unpaid);
                        ctx.ledger.debit(brand, share);
                    }
                    let exit = ctx.plan.exit;
                    let c = &mut self.customers[i];
                    c.purchased = true;
                    c.target = exit;
                    c.state = CustomerState::Exiting;
                }
                CustomerState::Exiting => {}
            }
        }

        let boundary = ctx.plan.exit_boundary_y;
        let radius = ctx.arrive_radius;
        self.customers = mem::take(&mut self.customers)
            .into_iter()
            .filter(|c| {
                !(c.state == CustomerState::Exiting
                    && (c.pos.y >= boundary || c.pos.within(c.target, radius)))
            })
            .collect();
    }

    /// Drop every live customer and restart the ID counter.  Spawn statistics
    /// survive; see [`reset_stats`](Self::reset_stats).
    pub fn clear(&mut self) {
        self.customers.clear();
        self.next_id = 0;
    }

    /// Zero the spawn counters (full reset, as opposed to a day seek).
    pub fn reset_stats(&mut self) {
        self.total_spawned = 0;
        self.spawned_by_brand.fill(0);
    }
}
