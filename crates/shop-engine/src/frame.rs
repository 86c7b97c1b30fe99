//! Per-tick render snapshot.
//!
//! A `Frame` is everything a renderer needs to draw one tick: agent
//! positions and states, per-shelf stock levels, and the playback header.
//! It borrows nothing from the engine, so hosts can hand frames to another
//! thread or queue them for encoding.

use shop_agents::{CustomerState, EmployeeState};
use shop_core::{BrandId, CustomerId, EmployeeId, Point};
use shop_world::StockBand;

/// One customer as drawn this tick.
#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id:    CustomerId,
    pub brand: BrandId,
    pub pos:   Point,
    pub state: CustomerState,
    pub color: &'static str,
}

/// One employee as drawn this tick.
#[derive(Debug, Clone)]
pub struct EmployeeView {
    pub id:       EmployeeId,
    pub brand:    BrandId,
    pub pos:      Point,
    pub state:    EmployeeState,
    pub color:    &'static str,
    pub quantity: u32,
}

/// One shelf's stock readout this tick.
#[derive(Debug, Clone)]
pub struct ShelfStock {
    pub slot:  usize,
    pub brand: BrandId,
    pub shelf: Point,
    pub level: u32,
    pub band:  StockBand,
    pub color: &'static str,
}

/// Full render snapshot for one tick.
#[derive(Debug, Clone)]
pub struct Frame {
    /// 1-based day within the viewed month.
    pub day_in_month: u32,
    pub running:        bool,
    pub month_complete: bool,

    pub customers: Vec<CustomerView>,
    pub employees: Vec<EmployeeView>,
    pub shelves:   Vec<ShelfStock>,

    /// Customers spawned since the last full reset.
    pub total_spawned: u64,
}
