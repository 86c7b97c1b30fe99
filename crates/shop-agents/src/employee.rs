//! Restocking-employee agents and their pool.
//!
//! One employee is spawned per authoritative stock increase (detected at the
//! day transition).  It carries the delivery quantity from the warehouse to
//! the brand's shelf, dwells there for a fixed number of ticks, credits the
//! ledger exactly once, and walks back:
//!
//! ```text
//! going_to_shelf ──arrive──▶ restocking ──countdown──▶ returning ──arrive──▶ retired
//!  (warehouse)                (shelf)     (credit)      (warehouse)
//! ```

use std::mem;

use shop_core::{BrandId, EmployeeId, Point};
use shop_ledger::StockLedger;
use shop_world::FloorPlan;

// ── Employee ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeState {
    /// Carrying the delivery from the warehouse to the shelf.
    GoingToShelf,
    /// Dwelling at the shelf; the credit lands when the countdown expires.
    Restocking,
    /// Walking back to the warehouse; retired on arrival.
    Returning,
}

impl std::fmt::Display for EmployeeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EmployeeState::GoingToShelf => "going_to_shelf",
            EmployeeState::Restocking => "restocking",
            EmployeeState::Returning => "returning",
        };
        write!(f, "{label}")
    }
}

/// One live employee agent.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id:     EmployeeId,
    pub brand:  BrandId,
    pub pos:    Point,
    pub target: Point,
    pub state:  EmployeeState,
    /// Display colour, fixed at spawn from the brand's selection slot.
    pub color: &'static str,
    /// Walking speed in px/tick.
    pub speed: f32,
    /// Units this delivery credits to the ledger.
    pub quantity: u32,
    /// Remaining dwell ticks while restocking.
    pub countdown: u32,
    /// Set when the credit lands; guards against double delivery.
    pub delivered: bool,
}

// ── EmployeeCtx ───────────────────────────────────────────────────────────────

/// Everything one pool advance needs from the engine.
pub struct EmployeeCtx<'a> {
    pub plan: &'a FloorPlan,
    /// Arrival radius for state transitions, in pixels.
    pub arrive_radius: f32,
    /// Dwell ticks at the shelf before the delivery lands.
    pub restock_ticks: u32,
    pub ledger: &'a mut StockLedger,
}

// ── EmployeePool ──────────────────────────────────────────────────────────────

/// All live employees plus the run's spawn counter.
#[derive(Debug, Default)]
pub struct EmployeePool {
    employees: Vec<Employee>,
    next_id:   u32,
}

impl EmployeePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live employees in spawn order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// `true` when an undelivered run for `brand` is already on the floor.
    pub fn has_pending_delivery(&self, brand: BrandId) -> bool {
        self.employees
            .iter()
            .any(|e| e.brand == brand && !e.delivered)
    }

    /// Spawn one employee at the warehouse carrying `quantity` units toward
    /// `shelf`.
    pub fn spawn(
        &mut self,
        brand: BrandId,
        color: &'static str,
        quantity: u32,
        warehouse: Point,
        shelf: Point,
        speed: f32,
    ) -> EmployeeId {
        let id = EmployeeId(self.next_id);
        self.next_id += 1;

        self.employees.push(Employee {
            id,
            brand,
            pos: warehouse,
            target: shelf,
            state: EmployeeState::GoingToShelf,
            color,
            speed,
            quantity,
            countdown: 0,
            delivered: false,
        });
        id
    }

    /// Advance every live employee one tick, then sweep out the ones back at
    /// the warehouse.
    pub fn advance(&mut self, ctx: &mut EmployeeCtx<'_>) {
        for e in &mut self.employees {
            if !e.pos.within(e.target, ctx.arrive_radius) {
                e.pos = e.pos.step_toward(e.target, e.speed);
                continue;
            }

            match e.state {
                EmployeeState::GoingToShelf => {
                    e.state = EmployeeState::Restocking;
                    e.countdown = ctx.restock_ticks;
                }
                EmployeeState::Restocking => {
                    if e.countdown > 0 {
                        e.countdown -= 1;
                    } else {
                        if !e.delivered {
                            ctx.ledger.credit(e.brand, e.quantity);
                            e.delivered = true;
                        }
                        e.target = ctx.plan.warehouse;
                        e.state = EmployeeState::Returning;
                    }
                }
                EmployeeState::Returning => {}
            }
        }

        let radius = ctx.arrive_radius;
        self.employees = mem::take(&mut self.employees)
            .into_iter()
            .filter(|e| {
                !(e.state == EmployeeState::Returning && e.pos.within(e.target, radius))
            })
            .collect();
    }

    /// Drop every live employee and restart the ID counter.
    pub fn clear(&mut self) {
        self.employees.clear();
        self.next_id = 0;
    }
}
